//! Error types for version matching and table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Upstream page users are pointed to when no mapping exists.
pub const UPSTREAM_INSTALL_URL: &str = "https://pytorch.org/get-started/locally/";

/// User-facing failures of a match request.
///
/// None of these are fatal: the interactive shell reports them and returns
/// to the prompt; non-interactive commands map them to exit codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// Input is not a `major.minor` version.
    #[error("Invalid CUDA version format '{0}': expected something like 11.8")]
    InvalidInputFormat(String),

    /// No table entry could be resolved.
    #[error("No PyTorch mapping for CUDA {0}; see {UPSTREAM_INSTALL_URL}")]
    NoMappingFound(String),

    /// Every detection strategy failed.
    #[error("CUDA detection failed: {0}")]
    DetectionFailed(String),

    /// No clipboard backend accepted the text.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

/// Failures while loading a version table file.
#[derive(Debug, Error)]
pub enum TableError {
    /// The file exists but could not be read.
    #[error("Failed to read version table {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// The file is not a valid version table document.
    #[error("Failed to parse version table {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// A key is not of the form `major.minor`.
    #[error("Invalid version table key '{0}': expected major.minor")]
    InvalidKey(String),
}
