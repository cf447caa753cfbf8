//! CUDA detection result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a detected CUDA version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionSource {
    /// Installed framework introspection (`torch.version.cuda`).
    #[serde(rename = "torch")]
    Framework,
    /// CUDA compiler (`nvcc --version`).
    #[serde(rename = "nvcc")]
    CompilerTool,
    /// Driver utility (`nvidia-smi`).
    #[serde(rename = "nvidia-smi")]
    DriverTool,
    /// Nothing could be detected.
    #[serde(rename = "none")]
    None,
}

impl DetectionSource {
    /// Short label used in output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Framework => "torch",
            Self::CompilerTool => "nvcc",
            Self::DriverTool => "nvidia-smi",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A version reported by a successful detection strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedVersion {
    /// Normalized `major.minor` version.
    pub version: String,
    /// Raw tool output the version was parsed from.
    pub raw: String,
}

/// One strategy that was tried and failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionAttempt {
    /// Strategy that was tried.
    pub source: DetectionSource,
    /// Why it failed.
    pub error: String,
}

/// Outcome of a full detection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Winning strategy, or `None` when every strategy failed.
    pub source: DetectionSource,
    /// Normalized version, if detected.
    pub version: Option<String>,
    /// Raw output of the winning strategy.
    pub raw: Option<String>,
    /// Summary error when nothing was detected.
    pub error: Option<String>,
    /// Failed strategies, in the order they were tried.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attempts: Vec<DetectionAttempt>,
}

impl DetectionResult {
    /// Build a successful result.
    pub fn detected(
        source: DetectionSource,
        found: DetectedVersion,
        attempts: Vec<DetectionAttempt>,
    ) -> Self {
        Self {
            source,
            version: Some(found.version),
            raw: Some(found.raw),
            error: None,
            attempts,
        }
    }

    /// Build the result for an exhausted detection run.
    pub fn not_detected(attempts: Vec<DetectionAttempt>) -> Self {
        Self {
            source: DetectionSource::None,
            version: None,
            raw: None,
            error: Some("Unable to detect CUDA version".to_string()),
            attempts,
        }
    }

    /// Whether a version was found.
    pub const fn is_detected(&self) -> bool {
        self.version.is_some()
    }
}
