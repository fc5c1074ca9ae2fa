//! Shows the saved profile and the per-signal chronotype score.

use super::resolve_uid;
use crate::{
    db::profiles::Profiles,
    libs::{chronotype::score, config::Config, messages::Message, view::View},
    msg_bail_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile to show; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,

    /// Delete the profile instead of showing it
    #[arg(long)]
    delete: bool,
}

pub fn cmd(args: ProfileArgs) -> Result<()> {
    let uid = resolve_uid(args.uid)?;
    let profiles = Profiles::new()?;

    if args.delete {
        if profiles.delete(&uid)? == 0 {
            msg_bail_anyhow!(Message::ProfileNotFound(uid));
        }
        msg_success!(Message::ProfileDeleted(uid));
        return Ok(());
    }

    let Some(profile) = profiles.fetch(&uid)? else {
        msg_bail_anyhow!(Message::ProfileNotFound(uid));
    };

    msg_print!(Message::ProfileHeader(profile.name.clone()), true);
    View::profile(&profile, Config::read()?.display().clock)?;

    // Stored answers may predate validation; report instead of failing.
    match score(&profile.answers) {
        Ok(breakdown) => {
            msg_print!(Message::ScoreBreakdownHeader, true);
            View::score(&breakdown)?;
            let chronotype = breakdown.chronotype();
            msg_print!(
                Message::ChronotypeResult {
                    icon: chronotype.icon().to_string(),
                    chronotype: chronotype.to_string(),
                    score: breakdown.total,
                },
                true
            );
        }
        Err(e) => msg_warning!(Message::ProfileInvalid(e.to_string())),
    }

    Ok(())
}
