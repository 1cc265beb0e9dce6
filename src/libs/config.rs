//! Configuration management for the todoctl application.
//!
//! Holds the connection settings for the remote todo service and persists
//! them as pretty-printed JSON in the platform data directory. A missing
//! file is not an error: the client falls back to the default local
//! service address so the tool works out of the box against a dev server.
//!
//! Location by platform:
//! - **Windows**: `%LOCALAPPDATA%\todoctl\config.json`
//! - **macOS**: `~/Library/Application Support/todoctl/config.json`
//! - **Linux**: `~/.local/share/todoctl/config.json`

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root URL of the reference service in a local dev setup.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Request timeout applied to every remote call, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote todo service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Service root URL; API routes live under `/api/v1` below it.
    pub api_url: String,
    /// Per-request timeout in seconds. Every remote call is bounded by
    /// this value; an expired timer surfaces as a transport error.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filled with current values.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or_default();

        let server = ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            timeout: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRequestTimeout.to_string())
                .default(default.timeout)
                .interact_text()?,
        };

        Ok(Config { server: Some(server) })
    }

    /// Returns the effective server settings, falling back to defaults
    /// when the section was never configured.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
}
