//! Core library modules for the circadian application.
//!
//! The chronotype core is pure and I/O-free:
//!
//! - **`time_of_day`**: strict `HH:MM` parsing and circular minute-of-day arithmetic
//! - **`chronotype`**: questionnaire scoring and lark/owl/intermediate classification
//! - **`schedule`**: ideal daily schedule derived from wake and sleep anchors
//! - **`error`**: the error type shared by the three modules above
//!
//! Around it sit the application modules: user documents (`profile`),
//! activity logs (`log_entry`), configuration and storage paths, console
//! rendering, export and user-facing messages.
//!
//! ## Usage
//!
//! ```rust
//! use circadian::libs::chronotype::{classify, ChronotypeProfile, Chronotype};
//! use circadian::libs::schedule::derive_schedule;
//!
//! let answers = ChronotypeProfile::new()
//!     .with_wake_time("05:30")
//!     .with_sleep_time("21:30")
//!     .with_best_time("09:00")
//!     .with_mental_work_time("10:00")
//!     .with_wake_difficulty(5);
//!
//! assert_eq!(classify(&answers)?, Chronotype::MorningLark);
//! let schedule = derive_schedule(&answers)?;
//! assert_eq!(schedule.iter().count(), 6);
//! # Ok::<(), circadian::libs::error::CoreError>(())
//! ```

pub mod chronotype;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod log_entry;
pub mod messages;
pub mod profile;
pub mod schedule;
pub mod time_of_day;
pub mod view;
