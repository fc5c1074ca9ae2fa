//! Configuration management for the circadian application.
//!
//! Settings live in a pretty-printed `config.json` inside the platform data
//! directory (see [`DataStorage`]). Every section is optional; a missing file
//! or a missing section simply means defaults.
//!
//! ## Configuration Structure
//!
//! - **User Config**: the opaque user id whose profile commands operate on
//! - **Display Config**: 12/24-hour clock and the "happening now" window
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use circadian::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Active user: {}", config.uid());
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// User id used when none is configured.
pub const DEFAULT_UID: &str = "default";

/// Represents a configurable module in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// How times of day are rendered.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockFormat {
    /// `7:30 AM`
    #[default]
    H12,
    /// `07:30`
    H24,
}

/// Identity of the profile the commands read and write.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserConfig {
    /// Opaque key of the user document in the profile store.
    pub uid: String,
}

/// Presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub clock: ClockFormat,

    /// Minutes either side of the current time within which a scheduled
    /// activity is highlighted as happening now.
    pub now_window: u32,
}

impl Default for DisplayConfig {
    /// 12-hour clock, 30 minute "now" window.
    fn default() -> Self {
        DisplayConfig {
            clock: ClockFormat::H12,
            now_window: 30,
        }
    }
}

/// Root configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads configuration from the data directory.
    ///
    /// Returns the default configuration when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Configured user id, or [`DEFAULT_UID`].
    pub fn uid(&self) -> String {
        self.user.as_ref().map(|u| u.uid.clone()).unwrap_or_else(|| DEFAULT_UID.to_string())
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults. Only the modules the user
    /// selects are touched.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = [
            ConfigModule {
                key: "user".to_string(),
                name: "User".to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "user" => {
                    msg_print!(Message::ConfigModuleUser);
                    let uid: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptUserId.to_string())
                        .default(config.uid())
                        .validate_with(|input: &String| {
                            if input.trim().is_empty() {
                                Err(Message::InvalidUserId.to_string())
                            } else {
                                Ok(())
                            }
                        })
                        .interact_text()?;
                    config.user = Some(UserConfig { uid: uid.trim().to_string() });
                }
                "display" => {
                    let default = config.display();
                    msg_print!(Message::ConfigModuleDisplay);
                    let clock_options = ["12-hour (7:30 AM)", "24-hour (07:30)"];
                    let clock = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptClockFormat.to_string())
                        .items(&clock_options)
                        .default(if default.clock == ClockFormat::H12 { 0 } else { 1 })
                        .interact()?;
                    config.display = Some(DisplayConfig {
                        clock: if clock == 0 { ClockFormat::H12 } else { ClockFormat::H24 },
                        now_window: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptNowWindow.to_string())
                            .default(default.now_window)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
