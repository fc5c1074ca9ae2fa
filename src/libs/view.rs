//! Console tables.

use super::chronotype::ChronotypeScore;
use super::config::ClockFormat;
use super::formatter::{format_deviation, format_time, FormattedActivity};
use super::log_entry::{group_by_date, LogEntry};
use super::profile::UserProfile;
use super::schedule::{ActivityKind, IdealSchedule, ScheduledActivity};
use super::time_of_day::TimeOfDay;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeSet;

pub struct View {}

impl View {
    /// Prints the day plan. Activities in `now` get a `▶` marker, activities in
    /// `done` a `✓`.
    pub fn schedule(
        schedule: &IdealSchedule,
        clock: ClockFormat,
        now: &[ScheduledActivity],
        done: &BTreeSet<ActivityKind>,
    ) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ACTIVITY", "TIME", "DONE"]);
        for (index, activity) in schedule.iter().enumerate() {
            let formatted = FormattedActivity::from_activity(index + 1, activity, clock);
            let marker = if now.iter().any(|a| a.kind == activity.kind) { "▶" } else { "" };
            let check = if done.contains(&activity.kind) { "✓" } else { "" };
            table.add_row(row![
                marker,
                format!("{} {}", activity.kind.icon(), formatted.activity),
                formatted.display_time,
                check
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn score(score: &ChronotypeScore) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SIGNAL", "ANSWER", "POINTS"]);
        for contribution in &score.contributions {
            table.add_row(row![contribution.signal, contribution.answer, format!("{:+}", contribution.delta)]);
        }
        table.add_row(row!["TOTAL", "", format!("{:+}", score.total)]);
        table.printstd();

        Ok(())
    }

    pub fn profile(profile: &UserProfile, clock: ClockFormat) -> Result<()> {
        let mut table = Table::new();
        let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        let answer_time = |value: &Option<String>| match value.as_deref().map(TimeOfDay::parse) {
            Some(Ok(time)) => format_time(time, clock),
            Some(Err(_)) => value.clone().unwrap_or_default(),
            None => "-".to_string(),
        };

        table.add_row(row!["Name", profile.name]);
        table.add_row(row!["Age", or_dash(profile.age.map(|a| a.to_string()))]);
        table.add_row(row!["Height", or_dash(profile.height.map(|h| format!("{} cm", h)))]);
        table.add_row(row!["Weight", or_dash(profile.weight.map(|w| format!("{} kg", w)))]);
        table.add_row(row!["Activity level", profile.activity_level]);
        table.add_row(row!["Fitness goal", profile.fitness_goal]);
        table.add_row(row!["Wake time", answer_time(&profile.answers.wake_time)]);
        table.add_row(row!["Sleep time", answer_time(&profile.answers.sleep_time)]);
        table.add_row(row!["Best time", answer_time(&profile.answers.best_time)]);
        table.add_row(row!["Mental work time", answer_time(&profile.answers.mental_work_time)]);
        table.add_row(row!["Wake difficulty", or_dash(profile.answers.wake_difficulty.map(|d| format!("{}/5", d)))]);
        table.add_row(row![
            "Chronotype",
            or_dash(profile.chronotype.map(|c| format!("{} {}", c.icon(), c)))
        ]);
        table.printstd();

        Ok(())
    }

    /// Prints log entries grouped by day. The deviation column compares each
    /// entry with the closest planned activity of the same kind.
    pub fn logs(entries: &[LogEntry], schedule: Option<&IdealSchedule>, clock: ClockFormat) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "KIND", "TIME", "VS PLAN", "DETAILS", "NOTE"]);
        for (date, day) in group_by_date(entries) {
            for entry in day {
                let deviation = schedule
                    .and_then(|s| entry.deviation(s))
                    .map(format_deviation)
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(row![
                    entry.id.unwrap_or(0),
                    date,
                    format!("{} {}", entry.kind.icon(), entry.kind),
                    format_time(entry.time, clock),
                    deviation,
                    entry.details.summary(),
                    entry.note.as_deref().unwrap_or("")
                ]);
            }
        }
        table.printstd();

        Ok(())
    }
}
