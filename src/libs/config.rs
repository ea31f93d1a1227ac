//! Application configuration management.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. The only setting today is an optional override for the
//! database file location; everything else about connecting to the backing
//! store is derived from [`DataStorage`] defaults.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Custom database file location. `None` means the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when missing.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    ///
    /// An empty answer keeps the platform default database location.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;

        let current = config.db_file.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbFilePath.to_string())
            .default(current)
            .allow_empty(true)
            .interact_text()?;

        config.db_file = if db_file.trim().is_empty() { None } else { Some(PathBuf::from(db_file.trim())) };
        Ok(config)
    }

    /// Removes the configuration file, resetting the application to defaults.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        Ok(())
    }
}
