use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// The API key is deliberately not part of this structure; it is only ever
/// read from the environment via [`get_api_key`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the API, including scheme and version prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 10 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

/// Reads the API key from the `BALLDONTLIE_API_KEY` environment variable.
///
/// # Errors
/// * `AppError::MissingApiKey` - the variable is unset or empty
pub fn get_api_key() -> Result<String, AppError> {
    match std::env::var(env_vars::API_KEY) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AppError::missing_api_key(env_vars::API_KEY)),
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `NBA_CLI_API_DOMAIN` - Override API domain
    /// - `NBA_CLI_LOG_FILE` - Override log file path
    /// - `NBA_CLI_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed. Trailing slashes are stripped from the domain.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(&Config {
            api_domain: self.api_domain.trim_end_matches('/').to_string(),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Human-readable summary for `--list-config`. Reports whether the API
    /// key is set without ever printing it.
    pub fn summary(&self, config_path: &str, api_key_present: bool) -> String {
        let log_file = self
            .log_file_path
            .clone()
            .unwrap_or_else(|| format!("{} (default)", Self::get_log_dir_path()));
        let api_key = if api_key_present { "set" } else { "not set" };

        [
            "Current Configuration".to_string(),
            "────────────────────────────────────".to_string(),
            format!("Config Location: {config_path}"),
            format!("API Domain:      {}", self.api_domain),
            format!("HTTP Timeout:    {}s", self.http_timeout_seconds),
            format!("Log File:        {log_file}"),
            format!("API Key:         {api_key} ({})", env_vars::API_KEY),
        ]
        .join("\n")
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
