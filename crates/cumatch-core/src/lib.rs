//! Core domain types, version resolution and port definitions for cumatch.
//!
//! Maps a CUDA toolkit version to compatible `torch` / `torchvision` /
//! `torchaudio` releases and renders pip and conda install commands. Nothing
//! in this crate executes processes; detection and clipboard access are
//! defined as ports and implemented in `cumatch-runtime`.
#![deny(unused_crate_dependencies)]

pub mod command;
pub mod domain;
pub mod errors;
pub mod paths;
pub mod ports;
pub mod resolver;
pub mod services;
pub mod settings;
pub mod table;

// Re-export commonly used types for convenience
pub use command::{
    DEFAULT_INDEX_URL, PipOptions, build_conda_command, build_pip_command, conda_toolkit_version,
    index_url_for_tag,
};
pub use domain::{
    CudaVersion, DetectedVersion, DetectionAttempt, DetectionResult, DetectionSource, MatchKind,
    ResolutionResult, VersionEntry, is_valid_version_format,
};
pub use errors::{MatchError, TableError, UPSTREAM_INSTALL_URL};
pub use paths::{
    VersionsFileResolution, VersionsFileSource, resolve_versions_file, resolve_versions_file_in,
    user_versions_file,
};
pub use ports::{
    ChainDetector, ClipboardError, ClipboardPort, CudaDetector, DetectionError, DetectionOutcome,
    DetectionStrategy,
};
pub use resolver::{Resolution, resolve, resolve_version};
pub use services::MatchService;
pub use settings::{
    DEFAULT_DETECT_TIMEOUT_SECS, DEFAULT_PYTHON, Settings, SettingsError, validate_settings,
};
pub use table::{TableOrigin, VersionTable};

// Dev-dependencies used only by some test modules
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
