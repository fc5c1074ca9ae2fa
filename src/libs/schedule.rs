//! Ideal daily schedule derivation.
//!
//! The schedule is anchored on two answers only, the preferred wake time and
//! the preferred sleep time. Every other activity sits at a fixed offset from
//! one of them:
//!
//! | Activity  | Anchor | Offset       |
//! |-----------|--------|--------------|
//! | WakeUp    | wake   | +0           |
//! | Breakfast | wake   | +30 min      |
//! | Lunch     | wake   | +270 min     |
//! | Workout   | wake   | +420 min     |
//! | Dinner    | sleep  | -180 min     |
//! | Sleep     | sleep  | +0           |
//!
//! Offsets go through [`TimeOfDay::offset`], so a sleep time of `00:30` puts
//! dinner at `21:30` the previous evening rather than at a negative minute.
//!
//! The resulting activities are ordered by minute of day. Activities landing
//! on the same minute keep the order of [`ActivityKind`] declaration.

use super::chronotype::ChronotypeProfile;
use super::error::CoreResult;
use super::time_of_day::{circular_distance, duration_minutes, TimeOfDay, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kinds of scheduled activity, declared in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    WakeUp,
    Breakfast,
    Lunch,
    Workout,
    Dinner,
    Sleep,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::WakeUp,
        ActivityKind::Breakfast,
        ActivityKind::Lunch,
        ActivityKind::Workout,
        ActivityKind::Dinner,
        ActivityKind::Sleep,
    ];

    pub fn is_meal(self) -> bool {
        matches!(self, ActivityKind::Breakfast | ActivityKind::Lunch | ActivityKind::Dinner)
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::WakeUp => "☀️",
            ActivityKind::Breakfast => "☕",
            ActivityKind::Lunch => "🍽️",
            ActivityKind::Workout => "🏋️",
            ActivityKind::Dinner => "🍲",
            ActivityKind::Sleep => "🌙",
        }
    }

    /// Stable identifier used on the command line and in storage.
    pub fn key(self) -> &'static str {
        match self {
            ActivityKind::WakeUp => "wake",
            ActivityKind::Breakfast => "breakfast",
            ActivityKind::Lunch => "lunch",
            ActivityKind::Workout => "workout",
            ActivityKind::Dinner => "dinner",
            ActivityKind::Sleep => "sleep",
        }
    }
}

impl Display for ActivityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityKind::WakeUp => "Wake Up",
            ActivityKind::Breakfast => "Breakfast",
            ActivityKind::Lunch => "Lunch",
            ActivityKind::Workout => "Workout",
            ActivityKind::Dinner => "Dinner",
            ActivityKind::Sleep => "Sleep",
        };
        f.write_str(label)
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.key() == normalized || (normalized == "wakeup" && *kind == ActivityKind::WakeUp))
            .ok_or_else(|| format!("unknown activity '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Wake,
    Sleep,
}

/// Anchor and minute offset of every activity, in tie-break order.
const SCHEDULE_RULES: [(ActivityKind, Anchor, i64); 6] = [
    (ActivityKind::WakeUp, Anchor::Wake, 0),
    (ActivityKind::Breakfast, Anchor::Wake, 30),
    (ActivityKind::Lunch, Anchor::Wake, 270),
    (ActivityKind::Workout, Anchor::Wake, 420),
    (ActivityKind::Dinner, Anchor::Sleep, -180),
    (ActivityKind::Sleep, Anchor::Sleep, 0),
];

/// A single recommended activity at a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledActivity {
    pub kind: ActivityKind,
    pub time: TimeOfDay,
}

/// The six recommended activities of a day, ordered by time of day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdealSchedule {
    pub activities: Vec<ScheduledActivity>,
}

impl IdealSchedule {
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledActivity> {
        self.activities.iter()
    }

    pub fn get(&self, kind: ActivityKind) -> Option<TimeOfDay> {
        self.activities.iter().find(|a| a.kind == kind).map(|a| a.time)
    }

    pub fn meals(&self) -> impl Iterator<Item = &ScheduledActivity> {
        self.activities.iter().filter(|a| a.kind.is_meal())
    }

    fn wake(&self) -> TimeOfDay {
        self.get(ActivityKind::WakeUp).unwrap_or_default()
    }

    fn sleep(&self) -> TimeOfDay {
        self.get(ActivityKind::Sleep).unwrap_or_default()
    }

    /// Minutes asleep, from the sleep transition forward to the wake transition.
    pub fn sleep_minutes(&self) -> i64 {
        duration_minutes(self.sleep(), self.wake())
    }

    /// Minutes awake, from the wake transition forward to the sleep transition.
    pub fn awake_minutes(&self) -> i64 {
        duration_minutes(self.wake(), self.sleep())
    }

    /// Percentage of the day spent asleep.
    pub fn sleep_share(&self) -> f64 {
        self.sleep_minutes() as f64 / MINUTES_PER_DAY as f64 * 100.0
    }

    /// Activities within `window` minutes of `now`, either side, across midnight.
    pub fn around(&self, now: TimeOfDay, window: i64) -> Vec<ScheduledActivity> {
        self.activities.iter().copied().filter(|a| circular_distance(a.time, now) <= window).collect()
    }

    /// The first activity strictly after `now`, wrapping to tomorrow.
    pub fn next_after(&self, now: TimeOfDay) -> Option<ScheduledActivity> {
        self.activities
            .iter()
            .copied()
            .filter(|a| a.time != now)
            .min_by_key(|a| duration_minutes(now, a.time))
    }
}

impl<'a> IntoIterator for &'a IdealSchedule {
    type Item = &'a ScheduledActivity;
    type IntoIter = std::slice::Iter<'a, ScheduledActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

/// Derives the ideal schedule for a profile.
///
/// Missing wake/sleep answers default to `07:00` / `22:00`; the other answers
/// are not consulted.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimeFormat`](super::error::CoreError) when the
/// wake or sleep time is malformed. No partial schedule is produced.
pub fn derive_schedule(profile: &ChronotypeProfile) -> CoreResult<IdealSchedule> {
    let (wake, sleep) = profile.anchors()?;

    let mut activities: Vec<ScheduledActivity> = SCHEDULE_RULES
        .iter()
        .map(|&(kind, anchor, offset)| {
            let base = match anchor {
                Anchor::Wake => wake,
                Anchor::Sleep => sleep,
            };
            ScheduledActivity { kind, time: base.offset(offset) }
        })
        .collect();
    // Stable: equal minutes keep rule order.
    activities.sort_by_key(|a| a.time.to_minutes());

    tracing::debug!(%wake, %sleep, "ideal schedule derived");
    Ok(IdealSchedule { activities })
}
