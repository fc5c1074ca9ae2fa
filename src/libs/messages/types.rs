/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; code refers to
/// messages by variant only.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleUser,
    ConfigModuleDisplay,
    PromptSelectModules,
    PromptUserId,
    PromptClockFormat,
    PromptNowWindow,
    InvalidUserId,

    // === QUESTIONNAIRE MESSAGES ===
    QuestionnaireHeader,
    PromptName,
    PromptAge,
    PromptHeight,
    PromptWeight,
    PromptActivityLevel,
    PromptFitnessGoal,
    PromptWakeTime,
    PromptSleepTime,
    PromptBestTime,
    PromptWakeDifficulty,
    PromptMentalWorkTime,
    InvalidName,
    InvalidAge,
    InvalidMeasure,
    InvalidTime(String), // offending input
    InvalidDate(String), // offending input
    UnknownActivity(String),

    // === PROFILE MESSAGES ===
    ProfileSaved(String),    // uid
    ProfileNotFound(String), // uid
    ProfileDeleted(String),  // uid
    ProfileHeader(String),   // name
    ProfileInvalid(String),  // core error text
    ChronotypeResult {
        icon: String,
        chronotype: String,
        score: i32,
    },
    ScoreBreakdownHeader,

    // === SCHEDULE MESSAGES ===
    ScheduleHeader(String), // name
    SleepSummary {
        sleep: String,
        awake: String,
        share: String,
    },
    HappeningNow(String), // activity list
    NextActivity {
        activity: String,
        time: String,
        wait: String,
    },

    // === LOG MESSAGES ===
    LogEntryAdded {
        kind: String,
        time: String,
    },
    LogDetailsMismatch(String), // log kind
    LogEntryDeleted(i64),
    LogEntryNotFound(i64),
    LogsHeader(String), // date
    NoLogEntries,

    // === COMPLETION MESSAGES ===
    ActivityMarkedDone(String), // activity
    ActivityUnmarked(String),   // activity
    ActivityNotMarked(String),  // activity

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NoDataToExport,
}
