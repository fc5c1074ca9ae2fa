//! Marks a scheduled activity as done (or not done) for a day.

use super::{parse_date, resolve_uid};
use crate::{
    db::completions::Completions,
    libs::{messages::Message, schedule::ActivityKind},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// wake, breakfast, lunch, workout, dinner or sleep
    activity: String,

    /// Remove the mark instead of setting it
    #[arg(long)]
    undo: bool,

    #[arg(long, short, default_value = "today", help = "Date (YYYY-MM-DD or 'today')")]
    date: String,

    /// Profile to update; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let kind: ActivityKind = args.activity.parse().map_err(|_| msg_error_anyhow!(Message::UnknownActivity(args.activity.clone())))?;
    let uid = resolve_uid(args.uid)?;
    let date = parse_date(&args.date)?;
    let completions = Completions::new()?;

    if args.undo {
        if completions.unmark(&uid, date, kind)? {
            msg_success!(Message::ActivityUnmarked(kind.to_string()));
        } else {
            msg_info!(Message::ActivityNotMarked(kind.to_string()));
        }
    } else {
        completions.mark(&uid, date, kind)?;
        msg_success!(Message::ActivityMarkedDone(kind.to_string()));
    }

    Ok(())
}
