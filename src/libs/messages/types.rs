#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleCurrency,
    ConfigModuleLimits,
    ConfigModuleTimer,
    ConfigModuleRates,
    PromptSelectModules,
    PromptCurrencySymbol,
    PromptCurrencyCode,
    PromptMaxAttendees,
    PromptMaxHistory,
    PromptUpdateInterval,
    PromptDefaultRole,

    // === ROSTER MESSAGES ===
    AttendeeAdded(String, String), // label, rate
    AttendeesAdded(usize),
    AttendeeRemoved(String),
    AttendeeUpdated(String),
    AttendeesCleared,
    AttendeeNotAtPosition(usize),
    NoAttendees,
    InvalidRate(String),
    InvalidRole(String),
    RolesHeader,

    // === MEETING MESSAGES ===
    TitleSet(String),
    MeetingStarted(String),
    MeetingPaused(String),  // elapsed
    MeetingResumed(String), // elapsed
    MeetingEnded {
        cost: String,
        duration: String,
    },
    MeetingReset,
    ConfirmReset,
    ResetCancelled,
    TransitionIgnored(String), // reason
    UntitledMeeting,

    // === STATUS MESSAGES ===
    StatusLine {
        status: String,
        elapsed: String,
        cost: String,
    },
    BurnRate {
        per_minute: String,
        per_hour: String,
        level: String,
    },
    Comparison(String),
    ProjectionsHeader,
    BreakdownHeader,

    // === WATCH MESSAGES ===
    WatchNotStarted,
    WatchPaused,
    WatchCompleted(String), // final cost
    WatchStopped,
    WatchWaitingForResume,

    // === HISTORY MESSAGES ===
    HistoryEmpty,
    HistoryHeader(usize),
    HistoryCleared,
    ConfirmClearHistory(usize),
    HistoryStats {
        count: usize,
        total: String,
        average: String,
        this_week: String,
    },
    TimeInMeetings(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportCopied,
    ClipboardUnavailable(String),
    NothingToExport,
    ExcelNeedsFile,

    // === STORAGE MESSAGES ===
    StoredStateMalformed(String, String), // key, error
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === GENERIC ===
    OperationCancelled,
}
