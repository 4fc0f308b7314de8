//! Configuration loading, validation, and management for cryochat.
//!
//! Loads configuration from `~/.cryochat/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use cryochat_core::Complexity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound for the artificial reply delay.
const MAX_RESPONSE_DELAY_MS: u64 = 60_000;

/// The root configuration structure.
///
/// Maps directly to `~/.cryochat/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Complexity tier a new conversation starts in
    #[serde(default)]
    pub complexity: Complexity,

    /// Simulated thinking time before each reply, in milliseconds
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Retry policy for responders that do real I/O
    #[serde(default)]
    pub retry: RetryConfig,

    /// What the terminal front-end prints alongside replies
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_response_delay_ms() -> u64 {
    800
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Extra attempts after the first one fails with a transport error
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff before the first retry; doubles on each further retry
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Time budget for a single attempt
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
}

fn default_max_retries() -> u32 {
    2
}
fn default_initial_backoff_ms() -> u64 {
    250
}
fn default_attempt_timeout_ms() -> u64 {
    10_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            attempt_timeout_ms: default_attempt_timeout_ms(),
        }
    }
}

impl RetryConfig {
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_citations: bool,

    #[serde(default = "default_true")]
    pub show_follow_ups: bool,

    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_citations: true,
            show_follow_ups: true,
            show_timestamps: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path with env var overrides.
    ///
    /// Priority: env vars > config file > defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply `CRYOCHAT_*` overrides. `lookup` resolves a variable name to
    /// its value, so callers other than [`AppConfig::load`] can feed
    /// overrides from anywhere.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CRYOCHAT_COMPLEXITY") {
            self.complexity = value
                .parse()
                .map_err(|e| ConfigError::ValidationError(format!("CRYOCHAT_COMPLEXITY: {e}")))?;
        }

        if let Some(value) = lookup("CRYOCHAT_DELAY_MS") {
            self.response_delay_ms = value.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "CRYOCHAT_DELAY_MS must be a whole number of milliseconds, got '{value}'"
                ))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".cryochat")
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.response_delay_ms > MAX_RESPONSE_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "response_delay_ms must be at most {MAX_RESPONSE_DELAY_MS}"
            )));
        }

        if self.retry.attempt_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "retry.attempt_timeout_ms must be > 0".into(),
            ));
        }

        if self.retry.max_retries > 10 {
            return Err(ConfigError::ValidationError(
                "retry.max_retries must be at most 10".into(),
            ));
        }

        Ok(())
    }

    /// Write the default config to `path` unless a file already exists there.
    ///
    /// Returns `true` when a file was written.
    pub fn write_default(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }

        let write_err = |e: std::io::Error| ConfigError::WriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, Self::default_toml()).map_err(write_err)?;
        tracing::info!(path = %path.display(), "Wrote default config");
        Ok(true)
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            complexity: Complexity::default(),
            response_delay_ms: default_response_delay_ms(),
            retry: RetryConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Failed to write config file at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
