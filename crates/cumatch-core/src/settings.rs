//! Settings domain types and validation.
//!
//! Values come from CLI flags, environment variables and `.env`; this module
//! only holds the merged result and checks it.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::{DEFAULT_INDEX_URL, PipOptions};

/// Default timeout for each external tool invocation during detection.
pub const DEFAULT_DETECT_TIMEOUT_SECS: f64 = 2.0;

/// Upper bound accepted for the detection timeout.
pub const MAX_DETECT_TIMEOUT_SECS: f64 = 60.0;

/// Default Python interpreter used for framework introspection.
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";
/// Default Python interpreter used for framework introspection.
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// Settings validation failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Detection timeout must be greater than 0 and at most {MAX_DETECT_TIMEOUT_SECS}s, got {0}")]
    InvalidTimeout(f64),

    #[error("Python executable must not be empty")]
    EmptyPython,

    #[error("Index URL must start with http:// or https://, got '{0}'")]
    InvalidIndexUrl(String),
}

/// Effective application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Explicit version table file, if configured.
    pub versions_file: Option<PathBuf>,

    /// Timeout in seconds for each detection tool.
    pub detect_timeout_secs: f64,

    /// Python interpreter used to introspect an installed `torch`.
    pub python: String,

    /// Base URL of the wheel index the package tag is appended to.
    pub index_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Settings {
    /// Create settings with sensible defaults.
    pub fn with_defaults() -> Self {
        Self {
            versions_file: None,
            detect_timeout_secs: DEFAULT_DETECT_TIMEOUT_SECS,
            python: DEFAULT_PYTHON.to_string(),
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }

    /// Detection timeout as a `Duration`.
    pub fn detect_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.detect_timeout_secs)
    }

    /// Pip options derived from these settings.
    pub fn pip_options(&self, extras: Vec<String>) -> PipOptions {
        PipOptions::default()
            .with_index_url(self.index_url.clone())
            .with_extras(extras)
    }
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    let timeout = settings.detect_timeout_secs;
    if !timeout.is_finite() || timeout <= 0.0 || timeout > MAX_DETECT_TIMEOUT_SECS {
        return Err(SettingsError::InvalidTimeout(timeout));
    }

    if settings.python.trim().is_empty() {
        return Err(SettingsError::EmptyPython);
    }

    let url = settings.index_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SettingsError::InvalidIndexUrl(settings.index_url.clone()));
    }

    Ok(())
}
