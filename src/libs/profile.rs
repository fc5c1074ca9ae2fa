//! The persisted user document.
//!
//! A profile holds the questionnaire answers plus the values derived from
//! them. Keys are camelCase so the stored JSON keeps the shape of the user
//! documents the planner has always written (`wakeTime`, `mentalWorkTime`,
//! `chronotype`, ...).

use super::chronotype::{score, Chronotype, ChronotypeProfile, ChronotypeScore};
use super::error::CoreResult;
use super::schedule::{derive_schedule, IdealSchedule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "Sedentary (little to no exercise)",
            ActivityLevel::LightlyActive => "Lightly Active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately Active (moderate exercise 3-5 days/week)",
            ActivityLevel::VeryActive => "Very Active (intense exercise 6-7 days/week)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FitnessGoal {
    #[default]
    WeightLoss,
    MuscleGain,
    GeneralWellness,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [FitnessGoal::WeightLoss, FitnessGoal::MuscleGain, FitnessGoal::GeneralWellness];
}

impl Display for FitnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::GeneralWellness => "General Wellness & Health",
        };
        f.write_str(label)
    }
}

/// Questionnaire answers and derived chronotype data for one user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub fitness_goal: FitnessGoal,
    #[serde(flatten)]
    pub answers: ChronotypeProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronotype: Option<Chronotype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_schedule: Option<IdealSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn new(name: &str, answers: ChronotypeProfile) -> Self {
        UserProfile {
            name: name.to_string(),
            answers,
            created_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Recomputes the chronotype and ideal schedule from the answers.
    ///
    /// Both values are computed before either is stored; on error the
    /// profile is left untouched.
    pub fn refresh(&mut self) -> CoreResult<()> {
        self.refresh_with_score().map(|_| ())
    }

    /// Same as [`UserProfile::refresh`], returning the score breakdown the
    /// chronotype was classified from.
    pub fn refresh_with_score(&mut self) -> CoreResult<ChronotypeScore> {
        let breakdown = score(&self.answers)?;
        let schedule = derive_schedule(&self.answers)?;
        self.chronotype = Some(breakdown.chronotype());
        self.ideal_schedule = Some(schedule);
        Ok(breakdown)
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_valid_age(age: u32) -> bool {
    age > 0 && age < 120
}

/// Height and weight must both be positive.
pub fn is_valid_measure(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questionnaire_validation() {
        assert!(is_valid_name("Ada"));
        assert!(!is_valid_name("   "));
        assert!(is_valid_age(1));
        assert!(is_valid_age(119));
        assert!(!is_valid_age(0));
        assert!(!is_valid_age(120));
        assert!(is_valid_measure(172.5));
        assert!(!is_valid_measure(0.0));
        assert!(!is_valid_measure(f64::NAN));
    }
}
