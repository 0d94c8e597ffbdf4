//! Immutable snapshot of a completed meeting.

use crate::libs::calculations::{current_cost, elapsed_active_ms};
use crate::libs::meeting::{stored_instant, Meeting};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub meeting_id: String,
    pub title: String,
    /// Total cost in cents.
    pub total_cost: u64,
    /// Active duration in milliseconds.
    pub duration_ms: u64,
    pub attendee_count: usize,
    /// Cents per minute of active time.
    pub average_cost_per_minute: u64,
    /// Cents per attendee.
    pub average_cost_per_attendee: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub completed_at: DateTime<Utc>,
}

impl MeetingSummary {
    /// Summarizes `meeting` as of `completed_at` using its final roster.
    pub fn from_meeting(meeting: &Meeting, completed_at: DateTime<Utc>) -> Self {
        let completed_at = stored_instant(completed_at);
        let timing = meeting.timing();
        let total_cost = current_cost(meeting.attendees(), &timing, completed_at);
        let duration_ms = elapsed_active_ms(&timing, completed_at);
        let attendee_count = meeting.attendees().len();

        Self {
            meeting_id: meeting.id().to_string(),
            title: meeting.title().to_string(),
            total_cost,
            duration_ms,
            attendee_count,
            average_cost_per_minute: per_minute(total_cost, duration_ms),
            average_cost_per_attendee: divide_rounded(total_cost as u128, attendee_count as u128),
            completed_at,
        }
    }

    pub fn duration_minutes(&self) -> u64 {
        divide_rounded(self.duration_ms as u128, 60_000)
    }
}

fn per_minute(total_cost: u64, duration_ms: u64) -> u64 {
    divide_rounded(total_cost as u128 * 60_000, duration_ms as u128)
}

/// Integer division rounded half-up; dividing by zero yields zero.
fn divide_rounded(numerator: u128, denominator: u128) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let remainder = numerator % denominator;
    let rounded = numerator / denominator + u128::from(remainder >= denominator - remainder);
    rounded.min(u64::MAX as u128) as u64
}
