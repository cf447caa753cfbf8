//! Domain types for cumatch.
//!
//! These types carry no I/O and are shared by the runtime adapters and the CLI.

pub mod detection;
pub mod entry;
pub mod resolution;
pub mod version;

pub use detection::{DetectedVersion, DetectionAttempt, DetectionResult, DetectionSource};
pub use entry::VersionEntry;
pub use resolution::{MatchKind, ResolutionResult};
pub use version::{CudaVersion, is_valid_version_format};
