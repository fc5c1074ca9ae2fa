//! Exports the schedule or the activity log to CSV or JSON.

use super::{parse_date, resolve_uid};
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::log_entry::LogFilter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum, default_value = "schedule")]
    data: ExportData,

    #[arg(long, short, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to a timestamped name in the current directory
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, short, help = "Only export logs of this date (YYYY-MM-DD or 'today')")]
    date: Option<String>,

    /// Profile to export; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let uid = resolve_uid(args.uid)?;
    let filter = match args.date.as_deref() {
        Some(date) => LogFilter::ByDate(parse_date(date)?),
        None => LogFilter::All,
    };

    Exporter::new(args.format, args.data, args.output).export(&uid, filter)
}
