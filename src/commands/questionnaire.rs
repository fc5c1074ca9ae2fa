//! Interactive chronotype questionnaire.
//!
//! Asks the personal questions first, then the five timing questions. The
//! answers are scored immediately and stored together with the derived
//! chronotype and schedule. Answers of an existing profile are offered as
//! defaults, so re-running the questionnaire only changes what the user edits.

use super::resolve_uid;
use crate::{
    db::profiles::Profiles,
    libs::{
        chronotype::{answered, ChronotypeProfile, DEFAULT_SLEEP_TIME, DEFAULT_WAKE_TIME},
        config::Config,
        messages::Message,
        profile::{is_valid_age, is_valid_measure, is_valid_name, ActivityLevel, FitnessGoal, UserProfile},
        time_of_day::TimeOfDay,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Default for the peak-energy and mental-work questions.
const DEFAULT_PEAK_TIME: &str = "10:00";

/// Wake difficulty choices, easiest first.
const WAKE_DIFFICULTY_OPTIONS: [(u8, &str); 5] = [
    (5, "Very easy"),
    (4, "Somewhat easy"),
    (3, "Neutral"),
    (2, "Somewhat difficult"),
    (1, "Very difficult"),
];

#[derive(Debug, Args)]
pub struct QuestionnaireArgs {
    /// Profile to write; defaults to the configured user
    #[arg(long, short)]
    uid: Option<String>,
}

pub fn cmd(args: QuestionnaireArgs) -> Result<()> {
    let uid = resolve_uid(args.uid)?;
    let profiles = Profiles::new()?;
    let previous = profiles.fetch(&uid)?.unwrap_or_default();
    let theme = ColorfulTheme::default();

    msg_print!(Message::QuestionnaireHeader, true);

    let name: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptName.to_string())
        .with_initial_text(previous.name.clone())
        .validate_with(|input: &String| if is_valid_name(input) { Ok(()) } else { Err(Message::InvalidName.to_string()) })
        .interact_text()?;

    let mut age_input = Input::<u32>::with_theme(&theme).with_prompt(Message::PromptAge.to_string());
    if let Some(age) = previous.age {
        age_input = age_input.default(age);
    }
    let age = age_input
        .validate_with(|input: &u32| if is_valid_age(*input) { Ok(()) } else { Err(Message::InvalidAge.to_string()) })
        .interact_text()?;

    let height = ask_measure(&theme, Message::PromptHeight, previous.height)?;
    let weight = ask_measure(&theme, Message::PromptWeight, previous.weight)?;

    let activity_level = ActivityLevel::ALL[Select::with_theme(&theme)
        .with_prompt(Message::PromptActivityLevel.to_string())
        .items(&ActivityLevel::ALL)
        .default(ActivityLevel::ALL.iter().position(|l| *l == previous.activity_level).unwrap_or(0))
        .interact()?];

    let fitness_goal = FitnessGoal::ALL[Select::with_theme(&theme)
        .with_prompt(Message::PromptFitnessGoal.to_string())
        .items(&FitnessGoal::ALL)
        .default(FitnessGoal::ALL.iter().position(|g| *g == previous.fitness_goal).unwrap_or(0))
        .interact()?];

    let answers = &previous.answers;
    let wake_time = ask_time(&theme, Message::PromptWakeTime, stored_or(&answers.wake_time, DEFAULT_WAKE_TIME))?;
    let sleep_time = ask_time(&theme, Message::PromptSleepTime, stored_or(&answers.sleep_time, DEFAULT_SLEEP_TIME))?;
    let best_time = ask_time(&theme, Message::PromptBestTime, stored_or(&answers.best_time, DEFAULT_PEAK_TIME))?;

    let labels: Vec<&str> = WAKE_DIFFICULTY_OPTIONS.iter().map(|(_, label)| *label).collect();
    let difficulty_default = answers
        .wake_difficulty
        .and_then(|d| WAKE_DIFFICULTY_OPTIONS.iter().position(|(value, _)| *value == d))
        .unwrap_or(2);
    let wake_difficulty = WAKE_DIFFICULTY_OPTIONS[Select::with_theme(&theme)
        .with_prompt(Message::PromptWakeDifficulty.to_string())
        .items(&labels[..])
        .default(difficulty_default)
        .interact()?]
    .0;

    let mental_work_time = ask_time(&theme, Message::PromptMentalWorkTime, stored_or(&answers.mental_work_time, DEFAULT_PEAK_TIME))?;

    let answers = ChronotypeProfile::new()
        .with_wake_time(&wake_time)
        .with_sleep_time(&sleep_time)
        .with_best_time(&best_time)
        .with_wake_difficulty(wake_difficulty)
        .with_mental_work_time(&mental_work_time);

    let mut profile = UserProfile {
        name: name.trim().to_string(),
        age: Some(age),
        height: Some(height),
        weight: Some(weight),
        activity_level,
        fitness_goal,
        answers,
        created_at: previous.created_at.or_else(|| Some(Utc::now())),
        ..Default::default()
    };
    let breakdown = profile.refresh_with_score()?;

    profiles.save(&uid, &profile)?;
    msg_success!(Message::ProfileSaved(uid.clone()), true);

    let chronotype = breakdown.chronotype();
    msg_print!(Message::ChronotypeResult {
        icon: chronotype.icon().to_string(),
        chronotype: chronotype.to_string(),
        score: breakdown.total,
    });
    if let Some(schedule) = &profile.ideal_schedule {
        msg_print!(Message::ScheduleHeader(profile.name.clone()), true);
        View::schedule(schedule, Config::read()?.display().clock, &[], &Default::default())?;
    }

    Ok(())
}

/// The stored answer to offer as prompt default; empty answers fall back.
fn stored_or<'a>(stored: &'a Option<String>, fallback: &'a str) -> &'a str {
    answered(stored).unwrap_or(fallback)
}

fn ask_time(theme: &ColorfulTheme, prompt: Message, default: &str) -> Result<String> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .validate_with(|input: &String| match TimeOfDay::parse(input.trim()) {
            Ok(_) => Ok(()),
            Err(_) => Err(Message::InvalidTime(input.clone()).to_string()),
        })
        .interact_text()?;
    Ok(input.trim().to_string())
}

fn ask_measure(theme: &ColorfulTheme, prompt: Message, default: Option<f64>) -> Result<f64> {
    let mut input = Input::<f64>::with_theme(theme).with_prompt(prompt.to_string());
    if let Some(value) = default {
        input = input.default(value);
    }
    Ok(input
        .validate_with(|input: &f64| if is_valid_measure(*input) { Ok(()) } else { Err(Message::InvalidMeasure.to_string()) })
        .interact_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_answer_defaults() {
        assert_eq!(stored_or(&Some("06:15".to_string()), DEFAULT_WAKE_TIME), "06:15");
        assert_eq!(stored_or(&None, DEFAULT_SLEEP_TIME), DEFAULT_SLEEP_TIME);
        // An empty answer would otherwise become an invalid default.
        assert_eq!(stored_or(&Some(String::new()), DEFAULT_PEAK_TIME), "10:00");
        assert!(TimeOfDay::parse(stored_or(&Some(String::new()), DEFAULT_WAKE_TIME)).is_ok());
    }
}
