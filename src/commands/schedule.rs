//! Shows the ideal schedule with what is happening now and what comes next.

use super::resolve_uid;
use crate::{
    db::{completions::Completions, profiles::Profiles},
    libs::{
        config::{ClockFormat, Config},
        formatter::{format_span, format_time},
        messages::Message,
        schedule::derive_schedule,
        time_of_day::{duration_minutes, TimeOfDay},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Profile to show; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,

    /// Pretend the current time is HH:MM
    #[arg(long, value_parser = TimeOfDay::parse)]
    at: Option<TimeOfDay>,

    /// Clock format for this run, overriding the configured one
    #[arg(long, value_enum)]
    clock: Option<ClockFormat>,
}

pub fn cmd(args: ScheduleArgs) -> Result<()> {
    let uid = resolve_uid(args.uid)?;
    let Some(profile) = Profiles::new()?.fetch(&uid)? else {
        msg_bail_anyhow!(Message::ProfileNotFound(uid));
    };

    let display = Config::read()?.display();
    let clock = args.clock.unwrap_or(display.clock);

    // Documents saved before the schedule existed are derived on the fly.
    let schedule = match profile.ideal_schedule {
        Some(schedule) => schedule,
        None => derive_schedule(&profile.answers)?,
    };

    let now = args.at.unwrap_or_else(TimeOfDay::now);
    let happening = schedule.around(now, i64::from(display.now_window));
    let done = Completions::new()?.fetch(&uid, Local::now().date_naive())?;

    msg_print!(Message::ScheduleHeader(profile.name.clone()), true);
    View::schedule(&schedule, clock, &happening, &done)?;

    msg_print!(Message::SleepSummary {
        sleep: format_span(&Duration::minutes(schedule.sleep_minutes())),
        awake: format_span(&Duration::minutes(schedule.awake_minutes())),
        share: format!("{:.0}", schedule.sleep_share()),
    });

    if !happening.is_empty() {
        let names: Vec<String> = happening.iter().map(|a| a.kind.to_string()).collect();
        msg_info!(Message::HappeningNow(names.join(", ")));
    }
    if let Some(next) = schedule.next_after(now) {
        msg_info!(Message::NextActivity {
            activity: next.kind.to_string(),
            time: format_time(next.time, clock),
            wait: format_span(&Duration::minutes(duration_minutes(now, next.time))),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: ScheduleArgs,
    }

    #[test]
    fn test_clock_flag() {
        let cli = Cli::try_parse_from(["schedule", "--clock", "h24", "--at", "07:30"]).unwrap();
        assert_eq!(cli.args.clock, Some(ClockFormat::H24));
        assert_eq!(cli.args.at, TimeOfDay::parse("07:30").ok());

        let cli = Cli::try_parse_from(["schedule", "--clock", "h12"]).unwrap();
        assert_eq!(cli.args.clock, Some(ClockFormat::H12));

        assert_eq!(Cli::try_parse_from(["schedule"]).unwrap().args.clock, None);
        assert!(Cli::try_parse_from(["schedule", "--clock", "24"]).is_err());
    }
}
