//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleUser => "User settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptUserId => "User id".to_string(),
            Message::PromptClockFormat => "Clock format".to_string(),
            Message::PromptNowWindow => "Highlight activities within this many minutes of now".to_string(),
            Message::InvalidUserId => "User id cannot be empty".to_string(),

            // === QUESTIONNAIRE MESSAGES ===
            Message::QuestionnaireHeader => "Let's find your circadian rhythm. Times use the 24-hour HH:MM format.".to_string(),
            Message::PromptName => "What is your name?".to_string(),
            Message::PromptAge => "How old are you?".to_string(),
            Message::PromptHeight => "What is your height? (cm)".to_string(),
            Message::PromptWeight => "What is your weight? (kg)".to_string(),
            Message::PromptActivityLevel => "What is your activity level?".to_string(),
            Message::PromptFitnessGoal => "What is your primary fitness goal?".to_string(),
            Message::PromptWakeTime => "What time would you prefer to wake up if you had no obligations?".to_string(),
            Message::PromptSleepTime => "What time would you prefer to go to sleep if you were free to plan?".to_string(),
            Message::PromptBestTime => "At what time of day do you feel your best mentally and physically?".to_string(),
            Message::PromptWakeDifficulty => "How easy is it for you to wake up in the morning?".to_string(),
            Message::PromptMentalWorkTime => "If you had to do 2 hours of hard mental work, when would you prefer to do it?".to_string(),
            Message::InvalidName => "Please enter your name".to_string(),
            Message::InvalidAge => "Age must be between 1 and 119".to_string(),
            Message::InvalidMeasure => "Please enter a positive number".to_string(),
            Message::InvalidTime(input) => format!("'{}' is not a valid time, use HH:MM (e.g. 07:30)", input),
            Message::InvalidDate(input) => format!("'{}' is not a valid date, use YYYY-MM-DD or 'today'", input),
            Message::UnknownActivity(input) => format!("Unknown activity '{}', expected one of: wake, breakfast, lunch, workout, dinner, sleep", input),

            // === PROFILE MESSAGES ===
            Message::ProfileSaved(uid) => format!("Profile information saved for '{}'", uid),
            Message::ProfileNotFound(uid) => format!("No profile found for '{}'. Run `circadian questionnaire` first.", uid),
            Message::ProfileDeleted(uid) => format!("Profile '{}' deleted", uid),
            Message::ProfileHeader(name) => format!("Profile: {}", name),
            Message::ProfileInvalid(error) => format!("Profile answers are invalid: {}", error),
            Message::ChronotypeResult { icon, chronotype, score } => format!("{} {} (score {:+})", icon, chronotype, score),
            Message::ScoreBreakdownHeader => "How your answers were scored:".to_string(),

            // === SCHEDULE MESSAGES ===
            Message::ScheduleHeader(name) => format!("Your optimal schedule, {}", name),
            Message::SleepSummary { sleep, awake, share } => format!("Sleep: {}  |  Awake: {}  |  {}% of the day asleep", sleep, awake, share),
            Message::HappeningNow(activities) => format!("Happening now: {}", activities),
            Message::NextActivity { activity, time, wait } => format!("Next up: {} at {} (in {})", activity, time, wait),

            // === LOG MESSAGES ===
            Message::LogEntryAdded { kind, time } => format!("{} logged at {}", kind, time),
            Message::LogDetailsMismatch(kind) => format!("Some of the given details do not apply to a {} entry", kind),
            Message::LogEntryDeleted(id) => format!("Log entry {} deleted", id),
            Message::LogEntryNotFound(id) => format!("Log entry {} not found", id),
            Message::LogsHeader(date) => format!("Activity log for {}", date),
            Message::NoLogEntries => "No entries logged yet".to_string(),

            // === COMPLETION MESSAGES ===
            Message::ActivityMarkedDone(activity) => format!("{} marked as done", activity),
            Message::ActivityUnmarked(activity) => format!("{} marked as not done", activity),
            Message::ActivityNotMarked(activity) => format!("{} was not marked as done, nothing to undo", activity),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NoDataToExport => "Nothing to export".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_without_mark_reads_differently() {
        let unmarked = Message::ActivityUnmarked("Lunch".to_string()).to_string();
        let not_marked = Message::ActivityNotMarked("Lunch".to_string()).to_string();
        assert_eq!(unmarked, "Lunch marked as not done");
        assert_eq!(not_marked, "Lunch was not marked as done, nothing to undo");
        assert_ne!(unmarked, not_marked);
    }

    #[test]
    fn test_details_mismatch_names_kind() {
        assert_eq!(
            Message::LogDetailsMismatch("Sleep".to_string()).to_string(),
            "Some of the given details do not apply to a Sleep entry"
        );
    }
}
