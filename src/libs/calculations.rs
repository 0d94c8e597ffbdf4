//! Cost accrual model for a running meeting.
//!
//! Cost is never accumulated tick by tick. Every query derives it from
//! scratch as *current roster rate × active duration*, so a late or missed
//! query can not drift, and the same inputs always give the same cents.
//!
//! ## Active duration
//!
//! ```text
//! reference  = paused_at     (while paused)
//!            | completed_at  (once completed)
//!            | now           (otherwise)
//! elapsed_ms = max(0, reference - start_time - total_paused_ms)
//! ```
//!
//! The reference selection is what keeps the clock frozen during a pause:
//! the interval spent paused is only folded into `total_paused_ms` on
//! resume, exactly once.
//!
//! ## Rounding
//!
//! `cost = round_half_up(total_hourly_rate × elapsed_ms / 3_600_000)`,
//! computed in exact integer arithmetic. Whole hours therefore never carry
//! a rounding error.
//!
//! ## Roster changes
//!
//! Because cost is `current roster × elapsed`, changing a rate or adding an
//! attendee mid-meeting also re-prices the time already elapsed. This
//! matches how the numbers have always been presented to users and is kept
//! as is.

use crate::libs::meeting::Attendee;
use chrono::{DateTime, Utc};

pub const MS_PER_HOUR: u64 = 3_600_000;

/// Timing anchors of a meeting, detached from the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timing {
    pub start_time: Option<DateTime<Utc>>,
    pub paused_at: Option<DateTime<Utc>>,
    pub total_paused_ms: u64,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Cost attributed to a single attendee for a given active duration.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeCost {
    pub attendee_id: String,
    pub label: String,
    pub hourly_rate: u64,
    pub cost: u64,
    /// Fraction of the meeting's total cost, 0.0 when the total is zero.
    pub share: f64,
}

/// Sum of all hourly rates, in cents per hour, saturating at `u64::MAX`.
pub fn total_hourly_rate(attendees: &[Attendee]) -> u64 {
    attendees.iter().fold(0u64, |total, a| total.saturating_add(a.hourly_rate))
}

/// Cents accrued per second by the whole roster.
pub fn cost_per_second(attendees: &[Attendee]) -> f64 {
    total_hourly_rate(attendees) as f64 / 3600.0
}

/// Cents accrued per minute by the whole roster (the burn rate).
pub fn cost_per_minute(attendees: &[Attendee]) -> f64 {
    total_hourly_rate(attendees) as f64 / 60.0
}

/// Active (non-paused) duration in milliseconds at `now`, clamped at zero.
pub fn elapsed_active_ms(timing: &Timing, now: DateTime<Utc>) -> u64 {
    let Some(start_time) = timing.start_time else {
        return 0;
    };

    let reference = timing.paused_at.or(timing.completed_at).unwrap_or(now);
    let elapsed = (reference - start_time).num_milliseconds() - timing.total_paused_ms.min(i64::MAX as u64) as i64;

    elapsed.max(0) as u64
}

/// Cost of `elapsed_ms` at `hourly_rate` cents per hour, rounded half-up.
pub fn cost_for_elapsed(hourly_rate: u64, elapsed_ms: u64) -> u64 {
    let numerator = hourly_rate as u128 * elapsed_ms as u128;
    let hour = MS_PER_HOUR as u128;
    let rounded = numerator / hour + u128::from(numerator % hour * 2 >= hour);
    rounded.min(u64::MAX as u128) as u64
}

/// Cost accrued so far; zero before the start or with an empty roster.
pub fn current_cost(attendees: &[Attendee], timing: &Timing, now: DateTime<Utc>) -> u64 {
    if timing.start_time.is_none() || attendees.is_empty() {
        return 0;
    }

    cost_for_elapsed(total_hourly_rate(attendees), elapsed_active_ms(timing, now))
}

/// What the current roster would cost over `duration_ms` of active time.
pub fn projected_cost(attendees: &[Attendee], duration_ms: u64) -> u64 {
    cost_for_elapsed(total_hourly_rate(attendees), duration_ms)
}

/// Projected costs for the usual meeting lengths: 15 min, 30 min, 1 h and 2 h.
pub fn standard_projections(attendees: &[Attendee]) -> Vec<(&'static str, u64)> {
    [("15 min", 15 * 60_000), ("30 min", 30 * 60_000), ("1 hour", MS_PER_HOUR), ("2 hours", 2 * MS_PER_HOUR)]
        .into_iter()
        .map(|(label, ms)| (label, projected_cost(attendees, ms)))
        .collect()
}

/// Splits the cost of `elapsed_ms` across the roster.
pub fn cost_breakdown(attendees: &[Attendee], elapsed_ms: u64) -> Vec<AttendeeCost> {
    let total = cost_for_elapsed(total_hourly_rate(attendees), elapsed_ms);

    attendees
        .iter()
        .map(|attendee| {
            let cost = cost_for_elapsed(attendee.hourly_rate, elapsed_ms);
            AttendeeCost {
                attendee_id: attendee.id.clone(),
                label: attendee.label(),
                hourly_rate: attendee.hourly_rate,
                cost,
                share: if total > 0 { cost as f64 / total as f64 } else { 0.0 },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        // 1 cent/hour for half an hour is exactly half a cent.
        assert_eq!(cost_for_elapsed(1, MS_PER_HOUR / 2), 1);
        assert_eq!(cost_for_elapsed(1, MS_PER_HOUR / 2 - 1), 0);
        assert_eq!(cost_for_elapsed(3, MS_PER_HOUR / 2), 2);
    }

    #[test]
    fn huge_rates_saturate() {
        assert_eq!(cost_for_elapsed(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(cost_for_elapsed(u64::MAX, MS_PER_HOUR), u64::MAX);
    }

    #[test]
    fn zero_rate_or_duration_costs_nothing() {
        assert_eq!(cost_for_elapsed(0, MS_PER_HOUR), 0);
        assert_eq!(cost_for_elapsed(9500, 0), 0);
    }
}
