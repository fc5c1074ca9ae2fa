//! Lists logged activities, or deletes one.

use super::{parse_date, resolve_uid};
use crate::{
    db::{logs::Logs, profiles::Profiles},
    libs::{config::Config, log_entry::LogFilter, messages::Message, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[arg(long, short, help = "Only show this date (YYYY-MM-DD or 'today'); all dates when omitted")]
    date: Option<String>,

    /// Delete the entry with this id
    #[arg(long)]
    delete: Option<i64>,

    /// Profile to read; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,
}

pub fn cmd(args: LogsArgs) -> Result<()> {
    let uid = resolve_uid(args.uid)?;
    let logs = Logs::new()?;

    if let Some(id) = args.delete {
        if logs.delete(&uid, id)? == 0 {
            msg_bail_anyhow!(Message::LogEntryNotFound(id));
        }
        msg_success!(Message::LogEntryDeleted(id));
        return Ok(());
    }

    let (filter, header) = match args.date.as_deref() {
        Some(date) => {
            let date = parse_date(date)?;
            (LogFilter::ByDate(date), date.format("%B %-d, %Y").to_string())
        }
        None => (LogFilter::All, "all dates".to_string()),
    };

    let entries = logs.fetch(&uid, filter)?;
    if entries.is_empty() {
        msg_info!(Message::NoLogEntries);
        return Ok(());
    }

    let schedule = Profiles::new()?.fetch(&uid)?.and_then(|p| p.ideal_schedule);
    msg_print!(Message::LogsHeader(header), true);
    View::logs(&entries, schedule.as_ref(), Config::read()?.display().clock)?;

    Ok(())
}
