//! CUDA detection port.
//!
//! Detection is modeled as an ordered list of named strategies. The first
//! strategy that yields a version wins; failures of earlier strategies are
//! kept as diagnostics instead of being discarded.
//!
//! # Design Notes
//!
//! - Core owns the traits, error type and the chaining logic (pure)
//! - Runtime owns the strategies (active probing via `tokio::process`)
//! - CLI injects the detector via bootstrap

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::{DetectedVersion, DetectionAttempt, DetectionResult, DetectionSource};

/// Why a single detection strategy failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DetectionError {
    /// The program is not installed or not on `PATH`.
    #[error("{0} not found")]
    NotFound(String),

    /// The program did not finish in time and was killed.
    #[error("{program} timed out after {secs:.1}s")]
    Timeout { program: String, secs: f64 },

    /// The program exited unsuccessfully.
    #[error("{program} exited with {}", exit_label(.code))]
    NonZeroExit { program: String, code: Option<i32> },

    /// The output did not contain a CUDA version.
    #[error("could not parse {program} output: {reason}")]
    Parse { program: String, reason: String },

    /// Spawning or talking to the process failed.
    #[error("failed to run {program}: {reason}")]
    Io { program: String, reason: String },
}

#[allow(clippy::ref_option)]
fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}"))
}

/// Result type for detection strategies.
pub type DetectionOutcome = Result<DetectedVersion, DetectionError>;

/// One way of finding the installed CUDA version.
#[async_trait]
pub trait DetectionStrategy: Send + Sync {
    /// Provenance reported when this strategy succeeds.
    fn source(&self) -> DetectionSource;

    /// Try to detect a version.
    async fn detect(&self) -> DetectionOutcome;
}

/// Port for a complete detection run.
#[async_trait]
pub trait CudaDetector: Send + Sync {
    /// Detect the CUDA version. Never fails; see [`DetectionResult::source`].
    async fn detect(&self) -> DetectionResult;
}

/// Detector that tries strategies in order, first success wins.
pub struct ChainDetector {
    strategies: Vec<Box<dyn DetectionStrategy>>,
}

impl ChainDetector {
    /// Create a detector from strategies in priority order.
    pub fn new(strategies: Vec<Box<dyn DetectionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Sources of the configured strategies, in order.
    pub fn sources(&self) -> Vec<DetectionSource> {
        self.strategies.iter().map(|s| s.source()).collect()
    }
}

#[async_trait]
impl CudaDetector for ChainDetector {
    async fn detect(&self) -> DetectionResult {
        let mut attempts = Vec::new();

        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.detect().await {
                Ok(found) => {
                    debug!(%source, version = %found.version, "CUDA version detected");
                    return DetectionResult::detected(source, found, attempts);
                }
                Err(e) => {
                    debug!(%source, error = %e, "Detection strategy failed");
                    attempts.push(DetectionAttempt {
                        source,
                        error: e.to_string(),
                    });
                }
            }
        }

        DetectionResult::not_detected(attempts)
    }
}
