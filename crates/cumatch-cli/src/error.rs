//! CLI error type and exit code mapping.

use cumatch_core::{DetectionError, MatchError, SettingsError, TableError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A match request failed.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The version table could not be loaded.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Invalid settings from flags or environment.
    #[error("Configuration error: {0}")]
    Config(#[from] SettingsError),

    /// An external tool could not be used.
    #[error(transparent)]
    Detection(#[from] DetectionError),

    /// IO error (stdin closed, broken pipe, ...).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 2: invalid version format (usage)
    /// - 3: no mapping for the requested version
    /// - 69: detection failed (`EX_UNAVAILABLE`)
    /// - 74: IO error (`EX_IOERR`)
    /// - 78: table or settings error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Match(err) => match err {
                MatchError::InvalidInputFormat(_) => 2,
                MatchError::NoMappingFound(_) => 3,
                MatchError::DetectionFailed(_) => 69,
                MatchError::ClipboardUnavailable(_) => 1,
            },
            Self::Detection(_) => 69,
            Self::Io(_) => 74,
            Self::Table(_) | Self::Config(_) => 78,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned by a handler.
///
/// Walks the cause chain so context added with `anyhow` does not hide the
/// underlying error. Unknown errors map to 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<MatchError>() {
            return CliError::Match(e.clone()).exit_code();
        }
        if let Some(e) = cause.downcast_ref::<DetectionError>() {
            return CliError::Detection(e.clone()).exit_code();
        }
        if cause.is::<TableError>() || cause.is::<SettingsError>() {
            return 78;
        }
        if cause.is::<std::io::Error>() {
            return 74;
        }
    }
    1
}
