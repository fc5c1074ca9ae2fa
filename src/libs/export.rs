//! Schedule and activity-log export.
//!
//! Writes either the ideal schedule of a user or their logged activities to a
//! CSV or pretty-printed JSON file. Without an explicit path the file is named
//! `circadian_<data>_<YYYYMMDD_HHMMSS>.<ext>` in the working directory.
//!
//! ```rust,no_run
//! use circadian::libs::export::{Exporter, ExportFormat, ExportData};
//! use circadian::libs::log_entry::LogFilter;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, ExportData::Schedule, None);
//! exporter.export("default", LogFilter::All)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    db::{logs::Logs, profiles::Profiles},
    libs::{
        config::{ClockFormat, Config},
        formatter::{format_deviation, FormattedActivity},
        log_entry::{LogEntry, LogFilter},
        messages::Message,
        schedule::IdealSchedule,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// The ideal schedule of the active profile.
    Schedule,
    /// Logged meals, workouts and sleep.
    Logs,
}

impl ExportData {
    fn name(self) -> &'static str {
        match self {
            ExportData::Schedule => "schedule",
            ExportData::Logs => "logs",
        }
    }
}

/// One log entry as written to an export file.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportLogEntry {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub time: String,
    /// Offset from the planned activity, e.g. `+15m`; empty when there is
    /// nothing to compare with.
    pub deviation: String,
    pub meal_type: String,
    pub meal_composition: String,
    pub calories: Option<u32>,
    pub workout_type: String,
    /// Minutes.
    pub duration: Option<u32>,
    pub sleep_quality: String,
    pub note: String,
}

impl ExportLogEntry {
    pub fn from_entry(entry: &LogEntry, schedule: Option<&IdealSchedule>) -> Self {
        fn label<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        let details = &entry.details;
        ExportLogEntry {
            id: entry.id.unwrap_or(0),
            date: entry.date.format("%Y-%m-%d").to_string(),
            kind: entry.kind.to_string(),
            time: entry.time.to_string(),
            deviation: schedule.and_then(|s| entry.deviation(s)).map(format_deviation).unwrap_or_default(),
            meal_type: label(details.meal_type),
            meal_composition: label(details.meal_composition),
            calories: details.calories,
            workout_type: label(details.workout_type),
            duration: details.duration,
            sleep_quality: label(details.sleep_quality),
            note: entry.note.clone().unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    data: ExportData,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let default_name = format!("circadian_{}_{}.{}", data.name(), Local::now().format("%Y%m%d_%H%M%S"), extension);
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_name));

        Self { format, data, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Loads the data of `uid` from the database and writes the file.
    ///
    /// `filter` applies to log exports only.
    pub fn export(&self, uid: &str, filter: LogFilter) -> Result<()> {
        let schedule = Profiles::new()?.fetch(uid)?.and_then(|p| p.ideal_schedule);

        match self.data {
            ExportData::Schedule => match schedule {
                Some(schedule) => self.write_schedule(&schedule, Config::read()?.display().clock)?,
                None => msg_bail_anyhow!(Message::NoDataToExport),
            },
            ExportData::Logs => {
                let entries = Logs::new()?.fetch(uid, filter)?;
                if entries.is_empty() {
                    msg_bail_anyhow!(Message::NoDataToExport);
                }
                self.write_logs(&entries, schedule.as_ref())?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn write_schedule(&self, schedule: &IdealSchedule, clock: ClockFormat) -> Result<()> {
        let rows: Vec<FormattedActivity> = schedule
            .iter()
            .enumerate()
            .map(|(index, activity)| FormattedActivity::from_activity(index + 1, activity, clock))
            .collect();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(["#", "Activity", "Time", "Display Time", "Dial Angle"])?;
                for row in &rows {
                    wtr.write_record([row.id.to_string(), row.activity.clone(), row.time.clone(), row.display_time.clone(), row.angle.clone()])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }
        Ok(())
    }

    pub fn write_logs(&self, entries: &[LogEntry], schedule: Option<&IdealSchedule>) -> Result<()> {
        let rows: Vec<ExportLogEntry> = entries.iter().map(|e| ExportLogEntry::from_entry(e, schedule)).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                for row in &rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }
        Ok(())
    }
}
