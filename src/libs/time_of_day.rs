//! Wall-clock time-of-day arithmetic.
//!
//! Every time handled by the planner is a naive local wall-clock time with no
//! date and no timezone. Internally it is a number of minutes in `[0, 1440)`;
//! externally it is a zero-padded, 24-hour `HH:MM` string.
//!
//! ## Wraparound
//!
//! A day is cyclic. Any offset added to or subtracted from a time may cross
//! midnight in either direction, so all offset arithmetic is funnelled through
//! [`TimeOfDay::from_minutes`], which normalizes an arbitrary integer with
//! `((m % 1440) + 1440) % 1440`. Nothing else in the crate performs its own
//! modulo on minutes.
//!
//! ```text
//!   23:30 + 60 min   ->  from_minutes(1470) -> 00:30
//!   00:30 - 180 min  ->  from_minutes(-150) -> 21:30
//!   duration(23:30 -> 00:30)                -> 60
//! ```
//!
//! ## Parsing
//!
//! Parsing is strict: exactly `HH:MM`, both parts zero-padded, hour in 0..=23
//! and minute in 0..=59. `7:30`, `24:00`, `12:60` and `7:30 PM` are all
//! rejected with [`CoreError::InvalidTimeFormat`]. Twelve-hour input is a
//! presentation concern and is not accepted here.
//!
//! ## Examples
//!
//! ```rust
//! use circadian::libs::time_of_day::TimeOfDay;
//!
//! let wake = TimeOfDay::parse("06:45")?;
//! assert_eq!(wake.to_minutes(), 405);
//! assert_eq!(wake.offset(30).to_string(), "07:15");
//! assert_eq!(wake.format_12_hour(), "6:45 AM");
//! # Ok::<(), circadian::libs::error::CoreError>(())
//! ```

use super::error::{CoreError, CoreResult};
use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Number of minutes in one day; the period of the time-of-day domain.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Half a day, the largest possible circular distance between two times.
pub const HALF_DAY_MINUTES: i64 = MINUTES_PER_DAY / 2;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// The inner value is always in `[0, 1440)`; there is no way to construct an
/// out-of-range instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Parses a strict `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimeFormat`] carrying the offending input
    /// when the string is not exactly five characters of the form `DD:DD`, or
    /// when the hour exceeds 23 or the minute exceeds 59.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidTimeFormat(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = u16::from((bytes[0] - b'0') * 10 + (bytes[1] - b'0'));
        let minute = u16::from((bytes[3] - b'0') * 10 + (bytes[4] - b'0'));
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(TimeOfDay(hour * 60 + minute))
    }

    /// Builds a time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Out-of-range components are a malformed time, not wrapped.
    pub fn from_hm(hour: u32, minute: u32) -> CoreResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(CoreError::InvalidTimeFormat(format!("{}:{}", hour, minute)));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Converts any minute count into a time of day, wrapping around midnight.
    ///
    /// Negative values and values of a day or more are normalized with
    /// `((m % 1440) + 1440) % 1440`, so `-180` is `21:00` and `1470` is `00:30`.
    pub fn from_minutes(minutes: i64) -> Self {
        let normalized = ((minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY;
        TimeOfDay(normalized as u16)
    }

    /// Minutes since midnight, `hour * 60 + minute`, in `[0, 1440)`.
    pub fn to_minutes(self) -> i64 {
        i64::from(self.0)
    }

    /// Hour component, 0 to 23.
    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    /// Minute component, 0 to 59.
    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Shifts the time by `delta` minutes in either direction, wrapping past
    /// midnight.
    pub fn offset(self, delta: i64) -> Self {
        TimeOfDay::from_minutes(self.to_minutes() + delta.rem_euclid(MINUTES_PER_DAY))
    }

    /// Minutes elapsed moving forward from `self` to `end`, in `[0, 1440)`.
    ///
    /// When `end` is earlier on the clock than `self` the interval crosses
    /// midnight. The duration from a time to itself is zero.
    pub fn duration_until(self, end: TimeOfDay) -> i64 {
        duration_minutes(self, end)
    }

    /// Position of the time on a 24-hour dial in degrees, `[0, 360)`, with
    /// midnight at 0 and noon at 180.
    pub fn dial_angle(self) -> f64 {
        self.day_fraction() * 360.0
    }

    /// Share of the day elapsed at this time, in `[0, 1)`.
    pub fn day_fraction(self) -> f64 {
        self.to_minutes() as f64 / MINUTES_PER_DAY as f64
    }

    /// Renders the time as `h:MM AM` / `h:MM PM`.
    ///
    /// Hour 0 is shown as `12 AM` and hour 12 as `12 PM`.
    pub fn format_12_hour(self) -> String {
        let hour = self.hour();
        let period = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute(), period)
    }

    /// Converts to a `chrono::NaiveTime` with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Current local wall-clock time, truncated to the minute.
    pub fn now() -> Self {
        Local::now().time().into()
    }
}

/// Minutes elapsed moving forward from `start` to `end`, in `[0, 1440)`.
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> i64 {
    TimeOfDay::from_minutes(end.to_minutes() - start.to_minutes()).to_minutes()
}

/// Shortest distance between two times on the dial, in `[0, 720]`.
pub fn circular_distance(a: TimeOfDay, b: TimeOfDay) -> i64 {
    duration_minutes(a, b).min(duration_minutes(b, a))
}

/// Shortest signed move from `from` to `to`, in `(-720, 720]`.
///
/// Positive means `to` is later than `from`, negative means earlier.
pub fn signed_offset(from: TimeOfDay, to: TimeOfDay) -> i64 {
    let forward = duration_minutes(from, to);
    if forward > HALF_DAY_MINUTES {
        forward - MINUTES_PER_DAY
    } else {
        forward
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TimeOfDay::parse(value)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay::from_minutes(i64::from(time.hour()) * 60 + i64::from(time.minute()))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}
