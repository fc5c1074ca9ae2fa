//! SQLite persistence for the circadian application.
//!
//! The chronotype core never touches storage; these stores are the caller
//! side that reads a user document, hands it to the core and merges the
//! derived values back.
//!
//! ## Stores
//!
//! - **`profiles`**: one JSON user document per opaque user id
//! - **`logs`**: activity log entries (meals, workouts, sleep)
//! - **`completions`**: scheduled activities marked done per day
//!
//! Each store creates its table on construction, so a fresh database needs
//! no setup step.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use circadian::db::profiles::Profiles;
//!
//! let profiles = Profiles::new()?;
//! if let Some(profile) = profiles.fetch("default")? {
//!     println!("{:?}", profile.chronotype);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod completions;
pub mod db;
pub mod logs;
pub mod profiles;
