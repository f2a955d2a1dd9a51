//! Configuration loading traits and types.
//!
//! Registry configuration is a TOML file with a `[shared]` section common
//! to every errorrep front end and a `[registry]` section sizing the
//! error log.
//!
//! # Usage
//!
//! ```rust,no_run
//! use errorrep_common::config::{load_config, ConfigError};
//! use errorrep_common::registry::ErrorRegistry;
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = load_config(Path::new("config.toml"))?;
//!     let registry = ErrorRegistry::new(config.registry)?;
//!     println!("log capacity: {}", registry.log_capacity());
//!     Ok(())
//! }
//! ```
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "errorrep-bench-01"
//!
//! [registry]
//! log_capacity = 16
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::consts::{DEFAULT_LOG_CAPACITY, MAX_LOG_CAPACITY};

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Every registry mutation.
    Debug,
    /// Current-error promotions and lifecycle messages.
    #[default]
    Info,
    /// Rejected registry calls.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Common configuration fields shared across all errorrep front ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error registry sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum number of entries retained in the error log
    /// (`1..=MAX_LOG_CAPACITY`). Oldest entries are evicted first.
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_log_capacity() -> usize {
    DEFAULT_LOG_CAPACITY
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Config with the given log capacity. Not validated until used.
    pub const fn with_log_capacity(log_capacity: usize) -> Self {
        Self { log_capacity }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `log_capacity` is zero or
    /// larger than [`MAX_LOG_CAPACITY`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_capacity == 0 || self.log_capacity > MAX_LOG_CAPACITY {
            return Err(ConfigError::ValidationError(format!(
                "log_capacity must be in 1..={MAX_LOG_CAPACITY}, got {}",
                self.log_capacity
            )));
        }
        Ok(())
    }
}

/// Top-level errorrep configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRepConfig {
    pub shared: SharedConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

impl ErrorRepConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.registry.validate()
    }
}

/// Trait for loading configuration from TOML files.
///
/// Blanket-implemented for any `serde::de::DeserializeOwned` type.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

/// Load and validate an [`ErrorRepConfig`] file.
pub fn load_config(path: &Path) -> Result<ErrorRepConfig, ConfigError> {
    let config = ErrorRepConfig::load(path)?;
    config.validate()?;
    tracing::debug!(
        path = %path.display(),
        log_capacity = config.registry.log_capacity,
        "configuration loaded"
    );
    Ok(config)
}
