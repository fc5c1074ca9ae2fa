//! Command-line interface.
//!
//! Every subcommand lives in its own module as an `Args` struct plus a
//! `cmd` function; [`Cli::menu`] parses the arguments and dispatches.

pub mod done;
pub mod export;
pub mod init;
pub mod log;
pub mod logs;
pub mod profile;
pub mod questionnaire;
pub mod schedule;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Answer the chronotype questionnaire and save the profile")]
    Questionnaire(questionnaire::QuestionnaireArgs),
    #[command(about = "Show the saved profile and how its chronotype was scored")]
    Profile(profile::ProfileArgs),
    #[command(about = "Show the ideal daily schedule")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "Log a meal, workout or sleep", arg_required_else_help = true)]
    Log(log::LogArgs),
    #[command(about = "Show logged activities")]
    Logs(logs::LogsArgs),
    #[command(about = "Mark a scheduled activity as done", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Export the schedule or the activity log")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Questionnaire(args) => questionnaire::cmd(args),
            Commands::Profile(args) => profile::cmd(args),
            Commands::Schedule(args) => schedule::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Logs(args) => logs::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Parses `today` or `YYYY-MM-DD`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    match date_str {
        "today" => Ok(Local::now().date_naive()),
        _ => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string()))),
    }
}

/// The `--uid` flag when given, otherwise the configured user.
pub fn resolve_uid(uid: Option<String>) -> Result<String> {
    match uid {
        Some(uid) => Ok(uid),
        None => Ok(Config::read()?.uid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-01").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(parse_date("today").unwrap(), Local::now().date_naive());
        assert!(parse_date("03/01/2025").is_err());
    }
}
