//! The live meeting: roster, lifecycle status and timing anchors.
//!
//! ## Lifecycle
//!
//! ```text
//! setup ──start──▶ running ──pause──▶ paused
//!                    ▲  │               │
//!                    └──┼────resume─────┘
//!                       └──end──▶ completed ◀──end── paused
//! any ──reset──▶ setup (fresh meeting, new id)
//! ```
//!
//! Every transition takes the instant it happens at (`now`) instead of
//! reading the clock itself, which keeps the model deterministic under test.
//!
//! A transition whose guard does not hold returns `Err(GuardError)` and
//! leaves the meeting exactly as it was. Callers treat that as a no-op.

use crate::libs::calculations::Timing;
use crate::libs::error::GuardError;
use crate::libs::history::History;
use crate::libs::roles::{RateTable, Role};
use crate::libs::summary::MeetingSummary;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_MAX_ATTENDEES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Setup,
    Running,
    Paused,
    Completed,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single meeting attendee. Rates are integer cents per hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    /// Optional display name, may be empty.
    pub name: String,
    pub role: Role,
    pub hourly_rate: u64,
    pub is_custom_rate: bool,
}

impl Attendee {
    /// Display name, falling back to the role label.
    pub fn label(&self) -> String {
        if self.name.trim().is_empty() {
            self.role.label().to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Input for adding an attendee.
#[derive(Debug, Clone)]
pub struct AttendeeDraft {
    pub role: Role,
    pub custom_rate: Option<u64>,
    pub name: String,
}

impl AttendeeDraft {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            custom_rate: None,
            name: String::new(),
        }
    }

    pub fn with_rate(mut self, rate: u64) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Partial update of an attendee; `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct AttendeeUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub hourly_rate: Option<u64>,
}

/// Rules the roster operations enforce.
#[derive(Debug, Clone)]
pub struct RosterPolicy {
    pub rates: RateTable,
    pub max_attendees: usize,
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            max_attendees: DEFAULT_MAX_ATTENDEES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    id: String,
    title: String,
    attendees: Vec<Attendee>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    start_time: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    paused_at: Option<DateTime<Utc>>,
    total_paused_ms: u64,
    status: MeetingStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    completed_at: Option<DateTime<Utc>>,
}

impl Meeting {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        let created_at = stored_instant(created_at);
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            attendees: Vec::new(),
            start_time: None,
            paused_at: None,
            total_paused_ms: 0,
            status: MeetingStatus::Setup,
            created_at,
            completed_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn status(&self) -> MeetingStatus {
        self.status
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn paused_at(&self) -> Option<DateTime<Utc>> {
        self.paused_at
    }

    pub fn total_paused_ms(&self) -> u64 {
        self.total_paused_ms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn timing(&self) -> Timing {
        Timing {
            start_time: self.start_time,
            paused_at: self.paused_at,
            total_paused_ms: self.total_paused_ms,
            completed_at: self.completed_at,
        }
    }

    pub fn can_start(&self) -> bool {
        self.status == MeetingStatus::Setup && !self.attendees.is_empty()
    }

    // === ROSTER ===

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends an attendee priced from `policy`; a custom role needs an explicit rate.
    pub fn add_attendee(&mut self, draft: AttendeeDraft, policy: &RosterPolicy) -> Result<&Attendee, GuardError> {
        if self.attendees.len() >= policy.max_attendees {
            return Err(GuardError::RosterFull { max: policy.max_attendees });
        }
        let hourly_rate = policy.rates.rate_for(draft.role, draft.custom_rate).ok_or(GuardError::MissingCustomRate)?;

        self.attendees.push(Attendee {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            role: draft.role,
            hourly_rate,
            is_custom_rate: draft.role == Role::Custom,
        });

        let added = &self.attendees[self.attendees.len() - 1];
        debug!(attendee = %added.id, rate = added.hourly_rate, "attendee added");
        Ok(added)
    }

    /// Adds one preset-rated attendee per role, stopping silently once the roster is full.
    pub fn add_quick_attendees(&mut self, roles: &[Role], policy: &RosterPolicy) -> usize {
        roles
            .iter()
            .filter(|role| **role != Role::Custom)
            .map(|role| self.add_attendee(AttendeeDraft::new(*role), policy).is_ok())
            .filter(|added| *added)
            .count()
    }

    pub fn remove_attendee(&mut self, id: &str) -> Result<Attendee, GuardError> {
        let index = self.position_of(id)?;
        Ok(self.attendees.remove(index))
    }

    /// Applies `update` to the attendee with `id`.
    ///
    /// Switching to the custom role needs an explicit rate, as when adding.
    pub fn update_attendee(&mut self, id: &str, update: AttendeeUpdate, rates: &RateTable) -> Result<&Attendee, GuardError> {
        let index = self.position_of(id)?;
        let role_rate = match update.role {
            Some(role) => Some((role, rates.rate_for(role, update.hourly_rate).ok_or(GuardError::MissingCustomRate)?)),
            None => None,
        };
        let attendee = &mut self.attendees[index];

        if let Some((role, rate)) = role_rate {
            attendee.hourly_rate = rate;
            attendee.role = role;
            attendee.is_custom_rate = role == Role::Custom;
        }
        if let Some(rate) = update.hourly_rate {
            attendee.hourly_rate = rate;
            attendee.is_custom_rate = true;
        }
        if let Some(name) = update.name {
            attendee.name = name;
        }

        Ok(&*attendee)
    }

    pub fn clear_attendees(&mut self) {
        self.attendees.clear();
    }

    /// Looks up an attendee by 1-based position in the roster.
    pub fn attendee_at(&self, position: usize) -> Option<&Attendee> {
        position.checked_sub(1).and_then(|index| self.attendees.get(index))
    }

    fn position_of(&self, id: &str) -> Result<usize, GuardError> {
        self.attendees.iter().position(|a| a.id == id).ok_or_else(|| GuardError::AttendeeNotFound(id.to_string()))
    }

    // === LIFECYCLE ===

    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), GuardError> {
        let now = stored_instant(now);
        match self.status {
            MeetingStatus::Setup => {}
            MeetingStatus::Completed => return Err(GuardError::AlreadyCompleted),
            _ => return Err(GuardError::AlreadyStarted),
        }
        if self.attendees.is_empty() {
            return Err(GuardError::NoAttendees);
        }

        self.start_time.get_or_insert(now);
        self.status = MeetingStatus::Running;
        debug!(meeting = %self.id, "meeting started");
        Ok(())
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<(), GuardError> {
        let now = stored_instant(now);
        if self.status != MeetingStatus::Running {
            return Err(GuardError::NotRunning);
        }

        self.paused_at = Some(now);
        self.status = MeetingStatus::Paused;
        debug!(meeting = %self.id, "meeting paused");
        Ok(())
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<(), GuardError> {
        let now = stored_instant(now);
        let paused_at = match (self.status, self.paused_at) {
            (MeetingStatus::Paused, Some(paused_at)) => paused_at,
            _ => return Err(GuardError::NotPaused),
        };

        self.total_paused_ms = self.total_paused_ms.saturating_add(pause_length_ms(paused_at, now));
        self.paused_at = None;
        self.status = MeetingStatus::Running;
        debug!(meeting = %self.id, total_paused_ms = self.total_paused_ms, "meeting resumed");
        Ok(())
    }

    /// Completes the meeting and returns its summary.
    ///
    /// Prefer [`Meeting::end`], which also records the summary in a history.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<MeetingSummary, GuardError> {
        let now = stored_instant(now);
        match self.status {
            MeetingStatus::Running | MeetingStatus::Paused => {}
            MeetingStatus::Completed => return Err(GuardError::AlreadyCompleted),
            MeetingStatus::Setup => return Err(GuardError::NotActive),
        }

        if let Some(paused_at) = self.paused_at.take() {
            self.total_paused_ms = self.total_paused_ms.saturating_add(pause_length_ms(paused_at, now));
        }
        self.completed_at = Some(now);
        self.status = MeetingStatus::Completed;
        debug!(meeting = %self.id, "meeting completed");

        Ok(MeetingSummary::from_meeting(self, now))
    }

    /// Completes the meeting and appends its summary to `history`.
    pub fn end(&mut self, history: &mut History, now: DateTime<Utc>) -> Result<MeetingSummary, GuardError> {
        let summary = self.complete(now)?;
        history.push(summary.clone());
        Ok(summary)
    }

    /// Start, pause or resume depending on the current status.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> Result<MeetingStatus, GuardError> {
        match self.status {
            MeetingStatus::Setup => self.start(now)?,
            MeetingStatus::Running => self.pause(now)?,
            MeetingStatus::Paused => self.resume(now)?,
            MeetingStatus::Completed => return Err(GuardError::AlreadyCompleted),
        }
        Ok(self.status)
    }

    /// Discards this meeting in favour of a fresh one.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Meeting::new(now);
    }
}

/// Timestamps are persisted as epoch milliseconds, so they are held at that
/// precision from the start.
pub(crate) fn stored_instant(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(3)
}

fn pause_length_ms(paused_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (now - paused_at).num_milliseconds().max(0) as u64
}
