//! Formatting helpers for times and durations shown to the user.
//!
//! Durations are shown as spans like `7h 30m` (`format_span`); deviations from
//! the plan as `+15m` (`format_deviation`). Times of day follow the configured
//! [`ClockFormat`].
//!
//! ## Examples
//!
//! ```rust
//! use circadian::libs::formatter::{format_deviation, format_span};
//! use chrono::Duration;
//!
//! assert_eq!(format_span(&Duration::minutes(450)), "7h 30m");
//! assert_eq!(format_deviation(15), "+15m");
//! ```

use super::config::ClockFormat;
use super::schedule::ScheduledActivity;
use super::time_of_day::TimeOfDay;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A scheduled activity with every field pre-rendered for tables and exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedActivity {
    /// Position in the day, starting from 1.
    pub id: usize,
    pub activity: String,
    /// 24-hour `HH:MM`.
    pub time: String,
    /// Time in the configured clock style.
    pub display_time: String,
    /// Degrees on a 24-hour dial, midnight at 0.
    pub angle: String,
}

impl FormattedActivity {
    pub fn from_activity(id: usize, activity: &ScheduledActivity, clock: ClockFormat) -> Self {
        FormattedActivity {
            id,
            activity: activity.kind.to_string(),
            time: activity.time.to_string(),
            display_time: format_time(activity.time, clock),
            angle: format!("{:.1}", activity.time.dial_angle()),
        }
    }
}

/// Formats a duration as `{h}h {m}m`, e.g. `8h 0m` or `0h 45m`.
pub fn format_span(duration: &Duration) -> String {
    let total = duration.num_minutes().max(0);
    format!("{}h {}m", total / 60, total % 60)
}

pub fn format_time(time: TimeOfDay, clock: ClockFormat) -> String {
    match clock {
        ClockFormat::H12 => time.format_12_hour(),
        ClockFormat::H24 => time.to_string(),
    }
}

/// Signed deviation in minutes, e.g. `+15m`, `-1h 5m`, `on time`.
pub fn format_deviation(minutes: i64) -> String {
    if minutes == 0 {
        return "on time".to_string();
    }
    let sign = if minutes > 0 { "+" } else { "-" };
    let abs = minutes.abs();
    if abs < 60 {
        format!("{}{}m", sign, abs)
    } else {
        format!("{}{}h {}m", sign, abs / 60, abs % 60)
    }
}
