//! Logged activities and how they compare with the ideal schedule.
//!
//! Each entry records what happened and when. Details are optional and only
//! apply to one kind: meals carry a type, composition and calories; workouts a
//! type and duration; sleep a quality.

use super::schedule::{ActivityKind, IdealSchedule};
use super::time_of_day::{circular_distance, signed_offset, TimeOfDay};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// What a logged activity was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    Meal,
    Workout,
    Sleep,
}

impl LogKind {
    /// Scheduled activities a log entry of this kind is compared against.
    pub fn planned_kinds(self) -> &'static [ActivityKind] {
        match self {
            LogKind::Meal => &[ActivityKind::Breakfast, ActivityKind::Lunch, ActivityKind::Dinner],
            LogKind::Workout => &[ActivityKind::Workout],
            LogKind::Sleep => &[ActivityKind::Sleep],
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LogKind::Meal => "🍽️",
            LogKind::Workout => "🏋️",
            LogKind::Sleep => "🛏️",
        }
    }
}

impl Display for LogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogKind::Meal => "Meal",
            LogKind::Workout => "Workout",
            LogKind::Sleep => "Sleep",
        };
        f.write_str(label)
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meal" => Ok(LogKind::Meal),
            "workout" => Ok(LogKind::Workout),
            "sleep" => Ok(LogKind::Sleep),
            other => Err(format!("unknown log kind '{}'", other)),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Implements `Display` with the given labels and a `FromStr` that accepts
/// them ignoring case, spaces, dashes and underscores.
macro_rules! labelled_enum {
    ($name:ident, $what:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.label()) == wanted)
                    .ok_or_else(|| format!("unknown {} '{}'", $what, s))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

labelled_enum!(MealType, "meal type", {
    Breakfast => "Breakfast",
    Lunch => "Lunch",
    Dinner => "Dinner",
    Snack => "Snack",
});

impl MealType {
    /// The planned meal this type stands for; snacks are unplanned.
    pub fn planned_kind(self) -> Option<ActivityKind> {
        match self {
            MealType::Breakfast => Some(ActivityKind::Breakfast),
            MealType::Lunch => Some(ActivityKind::Lunch),
            MealType::Dinner => Some(ActivityKind::Dinner),
            MealType::Snack => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum MealComposition {
    CarbsHeavy,
    ProteinHeavy,
    FiberHeavy,
    FatHeavy,
    Balanced,
}

labelled_enum!(MealComposition, "meal composition", {
    CarbsHeavy => "Carbs-heavy",
    ProteinHeavy => "Protein-heavy",
    FiberHeavy => "Fiber-heavy",
    FatHeavy => "Fat-heavy",
    Balanced => "Balanced",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutType {
    Cardio,
    WeightLifting,
}

labelled_enum!(WorkoutType, "workout type", {
    Cardio => "Cardio",
    WeightLifting => "Weight Lifting",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SleepQuality {
    Light,
    Moderate,
    Deep,
}

labelled_enum!(SleepQuality, "sleep quality", {
    Light => "Light",
    Moderate => "Moderate",
    Deep => "Deep",
});

/// Optional kind-specific details of a log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_composition: Option<MealComposition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<WorkoutType>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<SleepQuality>,
}

impl LogDetails {
    /// `true` when every detail that is set belongs to `kind`.
    pub fn fits(&self, kind: LogKind) -> bool {
        let meal = self.meal_type.is_some() || self.meal_composition.is_some() || self.calories.is_some();
        let workout = self.workout_type.is_some() || self.duration.is_some();
        let sleep = self.sleep_quality.is_some();
        match kind {
            LogKind::Meal => !workout && !sleep,
            LogKind::Workout => !meal && !sleep,
            LogKind::Sleep => !meal && !workout,
        }
    }

    /// Short human-readable summary, e.g. `Lunch, Balanced, 650 kcal`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(meal_type) = self.meal_type {
            parts.push(meal_type.to_string());
        }
        if let Some(composition) = self.meal_composition {
            parts.push(composition.to_string());
        }
        if let Some(calories) = self.calories {
            parts.push(format!("{} kcal", calories));
        }
        if let Some(workout_type) = self.workout_type {
            parts.push(workout_type.to_string());
        }
        if let Some(duration) = self.duration {
            parts.push(format!("{} min", duration));
        }
        if let Some(quality) = self.sleep_quality {
            parts.push(format!("{} sleep", quality));
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Option<i64>,
    pub kind: LogKind,
    pub time: TimeOfDay,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub timestamp: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub details: LogDetails,
}

impl LogEntry {
    pub fn new(kind: LogKind, time: TimeOfDay, date: NaiveDate, note: Option<&str>) -> Self {
        LogEntry {
            id: None,
            kind,
            time,
            note: note.filter(|n| !n.trim().is_empty()).map(str::to_string),
            date,
            timestamp: None,
            details: LogDetails::default(),
        }
    }

    pub fn with_details(mut self, details: LogDetails) -> Self {
        self.details = details;
        self
    }

    /// Signed minutes between this entry and the planned activity it stands
    /// for. Positive means later than planned.
    ///
    /// A meal with a known type is compared with that meal; a snack has no
    /// planned counterpart. Otherwise the closest planned activity of a
    /// matching kind is used.
    pub fn deviation(&self, schedule: &IdealSchedule) -> Option<i64> {
        if let (LogKind::Meal, Some(meal_type)) = (self.kind, self.details.meal_type) {
            return meal_type
                .planned_kind()
                .and_then(|kind| schedule.get(kind))
                .map(|planned| signed_offset(planned, self.time));
        }
        self.kind
            .planned_kinds()
            .iter()
            .filter_map(|&kind| schedule.get(kind))
            .min_by_key(|&planned| circular_distance(planned, self.time))
            .map(|planned| signed_offset(planned, self.time))
    }
}

#[derive(Debug, Clone)]
pub enum LogFilter {
    All,
    ByDate(NaiveDate),
}

/// Groups entries by date, dates ascending and entries by time within a day.
pub fn group_by_date(entries: &[LogEntry]) -> BTreeMap<NaiveDate, Vec<LogEntry>> {
    let mut groups: BTreeMap<NaiveDate, Vec<LogEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.date).or_default().push(entry.clone());
    }
    for day in groups.values_mut() {
        day.sort_by_key(|e| e.time);
    }
    groups
}
