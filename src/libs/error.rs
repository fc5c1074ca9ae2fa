//! Error kinds raised by the chronotype core.
//!
//! Both `classify` and `derive_schedule` are all-or-nothing: any of these
//! errors means no partial result was produced, and the call can be retried
//! once the input is corrected.

use thiserror::Error;

/// Failures of time parsing, classification and schedule derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A time-of-day string does not match zero-padded 24-hour `HH:MM`,
    /// or its hour/minute is out of range.
    #[error("invalid time format: '{0}' (expected HH:MM, 24-hour, zero-padded)")]
    InvalidTimeFormat(String),

    /// A questionnaire answer that has no default was not supplied.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Wake difficulty must be a rating from 1 (hardest) to 5 (easiest).
    #[error("wake difficulty must be between 1 and 5, got {0}")]
    WakeDifficultyOutOfRange(u8),
}

pub type CoreResult<T> = Result<T, CoreError>;
