//! Display implementation for meetcost application messages.
//!
//! All user-facing text lives here so commands only ever pick a `Message`
//! variant and hand it to one of the `msg_*!` macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to remove".to_string(),
            Message::ConfigModuleCurrency => "Currency settings".to_string(),
            Message::ConfigModuleLimits => "Roster and history limits".to_string(),
            Message::ConfigModuleTimer => "Live timer settings".to_string(),
            Message::ConfigModuleRates => "Hourly rate settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure (space to select, enter to confirm)".to_string(),
            Message::PromptCurrencySymbol => "Currency symbol".to_string(),
            Message::PromptCurrencyCode => "Currency code".to_string(),
            Message::PromptMaxAttendees => "Maximum attendees per meeting".to_string(),
            Message::PromptMaxHistory => "Maximum meetings kept in history".to_string(),
            Message::PromptUpdateInterval => "Live display refresh interval (ms)".to_string(),
            Message::PromptDefaultRole => "Role used when none is given".to_string(),

            // === ROSTER MESSAGES ===
            Message::AttendeeAdded(label, rate) => format!("Added {} at {}", label, rate),
            Message::AttendeesAdded(count) => format!("Added {} attendee(s)", count),
            Message::AttendeeRemoved(label) => format!("Removed {}", label),
            Message::AttendeeUpdated(label) => format!("Updated {}", label),
            Message::AttendeesCleared => "Roster cleared".to_string(),
            Message::AttendeeNotAtPosition(position) => format!("No attendee at position {}", position),
            Message::NoAttendees => "No attendees yet. Add some with `meetcost attendee add`.".to_string(),
            Message::InvalidRate(input) => format!("Invalid hourly rate '{}', expected an amount like 95 or 95.50", input),
            Message::InvalidRole(input) => format!("Unknown role '{}'. Run `meetcost roles` to list them.", input),
            Message::RolesHeader => "Role presets:".to_string(),

            // === MEETING MESSAGES ===
            Message::TitleSet(title) => format!("Meeting title set to '{}'", title),
            Message::MeetingStarted(title) => format!("Meeting '{}' started. The clock is ticking.", title),
            Message::MeetingPaused(elapsed) => format!("Meeting paused at {}", elapsed),
            Message::MeetingResumed(elapsed) => format!("Meeting resumed at {}", elapsed),
            Message::MeetingEnded { cost, duration } => format!("Meeting ended after {}. Total cost: {}", duration, cost),
            Message::MeetingReset => "Started a fresh meeting".to_string(),
            Message::ConfirmReset => "Reset the meeting? The current roster and timer will be lost.".to_string(),
            Message::ResetCancelled => "Reset cancelled".to_string(),
            Message::TransitionIgnored(reason) => format!("Nothing to do: {}", reason),
            Message::UntitledMeeting => "Untitled meeting".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusLine { status, elapsed, cost } => format!("[{}] {}  {}", status, elapsed, cost),
            Message::BurnRate { per_minute, per_hour, level } => format!("Burn rate: {}/min ({}/hr), {} burn", per_minute, per_hour, level),
            Message::Comparison(text) => format!("That's about {}", text),
            Message::ProjectionsHeader => "Projected cost with the current roster:".to_string(),
            Message::BreakdownHeader => "Cost per attendee:".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchNotStarted => "The meeting has not started yet. Run `meetcost start` first.".to_string(),
            Message::WatchPaused => "Meeting is paused.".to_string(),
            Message::WatchCompleted(cost) => format!("Meeting completed. Final cost: {}", cost),
            Message::WatchStopped => "Stopped watching.".to_string(),
            Message::WatchWaitingForResume => "Waiting for the meeting to resume (Ctrl-C to stop)...".to_string(),

            // === HISTORY MESSAGES ===
            Message::HistoryEmpty => "No completed meetings yet.".to_string(),
            Message::HistoryHeader(count) => format!("Last {} meeting(s):", count),
            Message::HistoryCleared => "History cleared".to_string(),
            Message::ConfirmClearHistory(count) => format!("Delete all {} meeting(s) from history?", count),
            Message::HistoryStats { count, total, average, this_week } => format!(
                "Meetings: {}\nTotal cost: {}\nAverage cost: {}\nLast 7 days: {}",
                count, total, average, this_week
            ),
            Message::TimeInMeetings(duration) => format!("Time spent in meetings: {}", duration),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportCopied => "Export copied to clipboard".to_string(),
            Message::ClipboardUnavailable(error) => format!("Clipboard is not available: {}", error),
            Message::NothingToExport => "History is empty, nothing to export.".to_string(),
            Message::ExcelNeedsFile => "Excel exports can only be written to a file".to_string(),

            // === STORAGE MESSAGES ===
            Message::StoredStateMalformed(key, error) => format!("Stored '{}' could not be read ({}), starting fresh", key, error),
            Message::MigrationsFound(count) => format!("Found {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
