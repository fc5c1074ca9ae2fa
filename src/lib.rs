//! # Circadian - chronotype scoring and ideal-schedule planning
//!
//! A command-line companion that classifies a user as a morning lark, night
//! owl or intermediate type from five questionnaire answers and derives an
//! ideal daily schedule from their preferred wake and sleep times.
//!
//! ## Features
//!
//! - **Chronotype Scoring**: additive score over wake, sleep, best-time,
//!   wake-difficulty and mental-work signals, with a per-signal breakdown
//! - **Ideal Schedule**: wake, breakfast, lunch, workout, dinner and sleep
//!   placed on a 24-hour dial that wraps at midnight
//! - **Activity Log**: meals, workouts and sleep compared with the plan
//! - **Data Export**: schedule and logs to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use circadian::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
