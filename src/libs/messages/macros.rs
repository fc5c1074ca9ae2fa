//! Message display and logging macros.
//!
//! Every user-facing line goes through one of these macros. They print plain
//! text to the terminal in normal mode and route to `tracing` when debug mode
//! is on, so a run with `RUST_LOG=debug` produces one coherent log stream.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either variable is set (checked once, then cached):
//! - **`CIRCADIAN_DEBUG`**: application-specific flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! ## Macros
//!
//! | Macro               | Prefix | Normal mode | Debug mode        |
//! |---------------------|--------|-------------|-------------------|
//! | `msg_print!`        |        | `println!`  | `tracing::info!`  |
//! | `msg_success!`      | ✅     | `println!`  | `tracing::info!`  |
//! | `msg_info!`         | ℹ️     | `println!`  | `tracing::info!`  |
//! | `msg_warning!`      | ⚠️     | `println!`  | `tracing::warn!`  |
//! | `msg_error!`        | ❌     | `eprintln!` | `tracing::error!` |
//! | `msg_error_anyhow!` |        | builds an `anyhow::Error`       |
//! | `msg_bail_anyhow!`  |        | returns an `anyhow::Error`      |
//!
//! Errors built by the last two are printed with the ❌ prefix by `main`.
//!
//! Passing `true` as a second argument surrounds the line with blank lines.
//!
//! ```rust
//! use circadian::{msg_success, msg_print};
//! use circadian::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_print!(Message::ScheduleHeader("Ada".to_string()), true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `CIRCADIAN_DEBUG` or `RUST_LOG` is set.
///
/// The environment is inspected on the first call only.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("CIRCADIAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
