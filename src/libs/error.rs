//! Error types shared across the meeting model and the persistence layer.
//!
//! `GuardError` is not a failure in the usual sense: it describes why a
//! lifecycle or roster operation was ignored. Whenever an operation returns
//! `Err(GuardError)`, the meeting it was called on is left untouched.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("the meeting has no attendees")]
    NoAttendees,

    #[error("the meeting has already been started")]
    AlreadyStarted,

    #[error("the meeting is not running")]
    NotRunning,

    #[error("the meeting is not paused")]
    NotPaused,

    #[error("the meeting is neither running nor paused")]
    NotActive,

    #[error("the meeting is already completed")]
    AlreadyCompleted,

    #[error("the roster is full ({max} attendees maximum)")]
    RosterFull { max: usize },

    #[error("no attendee with id {0}")]
    AttendeeNotFound(String),

    #[error("a custom role needs an explicit hourly rate")]
    MissingCustomRate,
}

/// Failure while reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
