//! Chronotype classification from questionnaire answers.
//!
//! Five self-reported signals each push a running score towards "morning" or
//! "evening". The signals are weak and only loosely correlated, so the final
//! mapping keeps a wide neutral band: a person is labelled a lark or an owl
//! only when the score reaches +5 or -5.
//!
//! ## Scoring Rule
//!
//! Rules are evaluated in this order and are additive. "Hour" is the hour
//! component of the time, not minute-adjusted.
//!
//! | Signal           | Condition | Delta |
//! |------------------|-----------|-------|
//! | wake hour        | <= 6      | +2    |
//! | wake hour        | 7 or 8    | +1    |
//! | wake hour        | >= 9      | -1    |
//! | sleep hour       | >= 23     | -2    |
//! | sleep hour       | == 22     | -1    |
//! | sleep hour       | <= 21     | +1    |
//! | best hour        | < 12      | +2    |
//! | best hour        | 12..=15   | +1    |
//! | best hour        | >= 16     | -1    |
//! | wake difficulty  | >= 4      | +1    |
//! | wake difficulty  | <= 2      | -1    |
//! | mental-work hour | < 12      | +1    |
//! | mental-work hour | 12..=15   | 0     |
//! | mental-work hour | >= 16     | -1    |
//!
//! ## Examples
//!
//! ```rust
//! use circadian::libs::chronotype::{classify, Chronotype, ChronotypeProfile};
//!
//! let profile = ChronotypeProfile::new()
//!     .with_wake_time("05:30")
//!     .with_sleep_time("21:00")
//!     .with_best_time("08:00")
//!     .with_wake_difficulty(5)
//!     .with_mental_work_time("09:00");
//!
//! assert_eq!(classify(&profile)?, Chronotype::MorningLark);
//! # Ok::<(), circadian::libs::error::CoreError>(())
//! ```

use super::error::{CoreError, CoreResult};
use super::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Wake time substituted when the profile has none.
pub const DEFAULT_WAKE_TIME: &str = "07:00";

/// Sleep time substituted when the profile has none.
pub const DEFAULT_SLEEP_TIME: &str = "22:00";

/// Score at or above which a profile is a morning lark.
pub const MORNING_LARK_THRESHOLD: i32 = 5;

/// Score at or below which a profile is a night owl.
pub const NIGHT_OWL_THRESHOLD: i32 = -5;

/// Questionnaire answers consumed by classification and schedule derivation.
///
/// Times are kept exactly as they were read from the user document so that a
/// malformed value surfaces as [`CoreError::InvalidTimeFormat`] at the point
/// of use. An empty string counts as "not answered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronotypeProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mental_work_time: Option<String>,
    /// 1 = very difficult, 5 = very easy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_difficulty: Option<u8>,
}

impl ChronotypeProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wake_time(mut self, time: &str) -> Self {
        self.wake_time = Some(time.to_string());
        self
    }

    pub fn with_sleep_time(mut self, time: &str) -> Self {
        self.sleep_time = Some(time.to_string());
        self
    }

    pub fn with_best_time(mut self, time: &str) -> Self {
        self.best_time = Some(time.to_string());
        self
    }

    pub fn with_mental_work_time(mut self, time: &str) -> Self {
        self.mental_work_time = Some(time.to_string());
        self
    }

    pub fn with_wake_difficulty(mut self, rating: u8) -> Self {
        self.wake_difficulty = Some(rating);
        self
    }

    /// Resolves the wake and sleep anchors.
    ///
    /// Defaults (`07:00`, `22:00`) are substituted for missing answers first,
    /// then both values are parsed. If either fails, nothing is returned.
    pub fn anchors(&self) -> CoreResult<(TimeOfDay, TimeOfDay)> {
        let wake_raw = answered(&self.wake_time).unwrap_or(DEFAULT_WAKE_TIME);
        let sleep_raw = answered(&self.sleep_time).unwrap_or(DEFAULT_SLEEP_TIME);

        let wake = TimeOfDay::parse(wake_raw)?;
        let sleep = TimeOfDay::parse(sleep_raw)?;
        Ok((wake, sleep))
    }
}

/// The stored answer, or `None` when it is missing or empty.
pub fn answered(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Coarse circadian preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chronotype {
    #[serde(rename = "Morning Lark")]
    MorningLark,
    #[serde(rename = "Night Owl")]
    NightOwl,
    #[serde(rename = "Intermediate Type")]
    IntermediateType,
}

impl Chronotype {
    /// Maps a total score onto a label using the +/-5 thresholds.
    pub fn from_score(score: i32) -> Self {
        if score >= MORNING_LARK_THRESHOLD {
            Chronotype::MorningLark
        } else if score <= NIGHT_OWL_THRESHOLD {
            Chronotype::NightOwl
        } else {
            Chronotype::IntermediateType
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Chronotype::MorningLark => "🌞",
            Chronotype::NightOwl => "🦉",
            Chronotype::IntermediateType => "⏳",
        }
    }
}

impl Display for Chronotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Chronotype::MorningLark => "Morning Lark",
            Chronotype::NightOwl => "Night Owl",
            Chronotype::IntermediateType => "Intermediate Type",
        };
        f.write_str(label)
    }
}

/// Questionnaire signals, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    WakeHour,
    SleepHour,
    BestHour,
    WakeDifficulty,
    MentalWorkHour,
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Signal::WakeHour => "Wake time",
            Signal::SleepHour => "Sleep time",
            Signal::BestHour => "Best time of day",
            Signal::WakeDifficulty => "Wake difficulty",
            Signal::MentalWorkHour => "Mental work time",
        };
        f.write_str(label)
    }
}

/// One signal's effect on the score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal: Signal,
    /// The answer as shown to the user, e.g. `05:30` or `4`.
    pub answer: String,
    pub delta: i32,
}

/// Per-signal breakdown of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChronotypeScore {
    pub contributions: Vec<SignalContribution>,
    pub total: i32,
}

impl ChronotypeScore {
    pub fn chronotype(&self) -> Chronotype {
        Chronotype::from_score(self.total)
    }
}

fn wake_hour_delta(hour: u32) -> i32 {
    match hour {
        0..=6 => 2,
        7 | 8 => 1,
        _ => -1,
    }
}

fn sleep_hour_delta(hour: u32) -> i32 {
    match hour {
        23.. => -2,
        22 => -1,
        _ => 1,
    }
}

fn best_hour_delta(hour: u32) -> i32 {
    match hour {
        0..=11 => 2,
        12..=15 => 1,
        _ => -1,
    }
}

fn wake_difficulty_delta(rating: u8) -> i32 {
    match rating {
        4.. => 1,
        3 => 0,
        _ => -1,
    }
}

fn mental_work_hour_delta(hour: u32) -> i32 {
    match hour {
        0..=11 => 1,
        12..=15 => 0,
        _ => -1,
    }
}

/// Scores a profile signal by signal.
///
/// # Errors
///
/// * [`CoreError::MissingRequiredField`] when `bestTime`, `mentalWorkTime` or
///   `wakeDifficulty` is absent. Checked before anything is parsed.
/// * [`CoreError::InvalidTimeFormat`] when any time fails to parse. Wake and
///   sleep times fall back to `07:00` / `22:00` when absent.
/// * [`CoreError::WakeDifficultyOutOfRange`] when the rating is not 1 to 5.
pub fn score(profile: &ChronotypeProfile) -> CoreResult<ChronotypeScore> {
    let best_raw = answered(&profile.best_time).ok_or(CoreError::MissingRequiredField("bestTime"))?;
    let mental_raw = answered(&profile.mental_work_time).ok_or(CoreError::MissingRequiredField("mentalWorkTime"))?;
    let difficulty = profile.wake_difficulty.ok_or(CoreError::MissingRequiredField("wakeDifficulty"))?;

    let (wake, sleep) = profile.anchors()?;
    let best = TimeOfDay::parse(best_raw)?;
    let mental = TimeOfDay::parse(mental_raw)?;
    if !(1..=5).contains(&difficulty) {
        return Err(CoreError::WakeDifficultyOutOfRange(difficulty));
    }

    let contributions = vec![
        SignalContribution {
            signal: Signal::WakeHour,
            answer: wake.to_string(),
            delta: wake_hour_delta(wake.hour()),
        },
        SignalContribution {
            signal: Signal::SleepHour,
            answer: sleep.to_string(),
            delta: sleep_hour_delta(sleep.hour()),
        },
        SignalContribution {
            signal: Signal::BestHour,
            answer: best.to_string(),
            delta: best_hour_delta(best.hour()),
        },
        SignalContribution {
            signal: Signal::WakeDifficulty,
            answer: difficulty.to_string(),
            delta: wake_difficulty_delta(difficulty),
        },
        SignalContribution {
            signal: Signal::MentalWorkHour,
            answer: mental.to_string(),
            delta: mental_work_hour_delta(mental.hour()),
        },
    ];
    let total = contributions.iter().map(|c| c.delta).sum();

    tracing::debug!(total, "chronotype score computed");
    Ok(ChronotypeScore { contributions, total })
}

/// Classifies a profile as a morning lark, night owl or intermediate type.
///
/// Fails exactly when [`score`] fails.
pub fn classify(profile: &ChronotypeProfile) -> CoreResult<Chronotype> {
    Ok(score(profile)?.chronotype())
}
