//! Capped, newest-first list of completed meeting summaries.
//!
//! The history is independent of the live meeting: the only coupling is
//! that completing a meeting pushes its summary here. Once the list reaches
//! its capacity, every push evicts the oldest entry.

use crate::libs::summary::MeetingSummary;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_MAX_HISTORY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    meetings: Vec<MeetingSummary>,
    capacity: usize,
}

/// Aggregates over the whole history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStats {
    pub count: usize,
    pub total_cost: u64,
    pub average_cost: u64,
    pub last_week_cost: u64,
    pub total_duration_ms: u64,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            meetings: Vec::new(),
            capacity,
        }
    }

    /// Builds a history from stored entries (newest first), dropping any beyond `capacity`.
    pub fn from_entries(mut meetings: Vec<MeetingSummary>, capacity: usize) -> Self {
        meetings.truncate(capacity);
        Self { meetings, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[MeetingSummary] {
        &self.meetings
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    pub fn latest(&self) -> Option<&MeetingSummary> {
        self.meetings.first()
    }

    pub fn push(&mut self, summary: MeetingSummary) {
        self.meetings.insert(0, summary);
        self.meetings.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.meetings.clear();
    }

    /// Sum of all meeting costs, saturating at `u64::MAX`.
    pub fn total_cost(&self) -> u64 {
        saturating_sum(self.meetings.iter().map(|m| m.total_cost))
    }

    /// Mean cost per meeting in cents, rounded half-up.
    pub fn average_cost(&self) -> u64 {
        let total: u128 = self.meetings.iter().map(|m| m.total_cost as u128).sum();
        match self.meetings.len() as u128 {
            0 => 0,
            count => ((total * 2 + count) / (count * 2)).min(u64::MAX as u128) as u64,
        }
    }

    /// Cost of meetings completed strictly after `cutoff`.
    pub fn cost_since(&self, cutoff: DateTime<Utc>) -> u64 {
        saturating_sum(self.meetings.iter().filter(|m| m.completed_at > cutoff).map(|m| m.total_cost))
    }

    pub fn stats(&self, now: DateTime<Utc>) -> HistoryStats {
        HistoryStats {
            count: self.meetings.len(),
            total_cost: self.total_cost(),
            average_cost: self.average_cost(),
            last_week_cost: self.cost_since(now - Duration::days(7)),
            total_duration_ms: saturating_sum(self.meetings.iter().map(|m| m.duration_ms)),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}
