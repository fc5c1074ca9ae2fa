//! Records a meal, workout or sleep.

use super::{parse_date, resolve_uid};
use crate::{
    db::logs::Logs,
    libs::{
        log_entry::{LogDetails, LogEntry, LogKind, MealComposition, MealType, SleepQuality, WorkoutType},
        messages::Message,
        time_of_day::TimeOfDay,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// What to log: meal, workout or sleep
    kind: LogKind,

    /// Time of the activity (HH:MM); defaults to now
    #[arg(long, short, value_parser = TimeOfDay::parse)]
    time: Option<TimeOfDay>,

    /// Free-form note
    #[arg(long, short)]
    note: Option<String>,

    #[arg(long, short, default_value = "today", help = "Date of the activity (YYYY-MM-DD or 'today')")]
    date: String,

    /// Profile to log for; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,

    /// Which meal this was
    #[arg(long, value_enum)]
    meal_type: Option<MealType>,

    /// What the meal mostly consisted of
    #[arg(long, value_enum)]
    composition: Option<MealComposition>,

    /// Calories eaten
    #[arg(long)]
    calories: Option<u32>,

    #[arg(long, value_enum)]
    workout_type: Option<WorkoutType>,

    /// Workout length in minutes
    #[arg(long)]
    duration: Option<u32>,

    #[arg(long, value_enum)]
    sleep_quality: Option<SleepQuality>,
}

impl LogArgs {
    fn details(&self) -> LogDetails {
        LogDetails {
            meal_type: self.meal_type,
            meal_composition: self.composition,
            calories: self.calories,
            workout_type: self.workout_type,
            duration: self.duration,
            sleep_quality: self.sleep_quality,
        }
    }
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let details = args.details();
    if !details.fits(args.kind) {
        msg_bail_anyhow!(Message::LogDetailsMismatch(args.kind.to_string()));
    }
    let uid = resolve_uid(args.uid)?;
    let date = parse_date(&args.date)?;
    let time = args.time.unwrap_or_else(TimeOfDay::now);

    let entry = LogEntry::new(args.kind, time, date, args.note.as_deref()).with_details(details);
    let id = Logs::new()?.insert(&uid, &entry)?;
    tracing::debug!(id, %date, "log entry stored");

    let summary = entry.details.summary();
    let kind = if summary.is_empty() {
        format!("{} {}", entry.kind.icon(), entry.kind)
    } else {
        format!("{} {} ({})", entry.kind.icon(), entry.kind, summary)
    };
    msg_success!(Message::LogEntryAdded {
        kind,
        time: entry.time.to_string(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: LogArgs,
    }

    #[test]
    fn test_detail_flags_parse() {
        let cli = Cli::try_parse_from([
            "log", "meal", "--meal-type", "lunch", "--composition", "protein-heavy", "--calories", "650",
        ])
        .unwrap();
        let details = cli.args.details();
        assert_eq!(details.meal_type, Some(MealType::Lunch));
        assert_eq!(details.meal_composition, Some(MealComposition::ProteinHeavy));
        assert_eq!(details.calories, Some(650));
        assert!(details.fits(LogKind::Meal));
    }

    #[test]
    fn test_workout_flags_do_not_fit_sleep() {
        let cli = Cli::try_parse_from(["log", "sleep", "--workout-type", "weight-lifting", "--duration", "45"]).unwrap();
        assert!(!cli.args.details().fits(LogKind::Sleep));
    }
}
