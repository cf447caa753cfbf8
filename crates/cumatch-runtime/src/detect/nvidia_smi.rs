//! Driver utility (`nvidia-smi`) probe.
//!
//! The banner printed by plain `nvidia-smi` includes the highest CUDA
//! version the installed driver supports.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use cumatch_core::{
    DetectedVersion, DetectionError, DetectionOutcome, DetectionSource, DetectionStrategy,
};
use regex::Regex;

use crate::process::run_tool;

pub(crate) const PROGRAM: &str = "nvidia-smi";

// "| NVIDIA-SMI 535.104.05   Driver Version: 535.104.05   CUDA Version: 12.2     |"
static CUDA_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)CUDA\s+Version\s*:\s*([0-9]+\.[0-9]+)").expect("valid nvidia-smi regex")
});

/// Extract the driver's CUDA version from `nvidia-smi` output.
pub fn parse_nvidia_smi_output(output: &str) -> Option<String> {
    CUDA_VERSION
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detects the CUDA version supported by the installed NVIDIA driver.
#[derive(Debug, Clone)]
pub struct NvidiaSmiProbe {
    timeout: Duration,
}

impl NvidiaSmiProbe {
    /// Create a probe with the given per-invocation timeout.
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DetectionStrategy for NvidiaSmiProbe {
    fn source(&self) -> DetectionSource {
        DetectionSource::DriverTool
    }

    async fn detect(&self) -> DetectionOutcome {
        let output = run_tool(PROGRAM, &[], self.timeout).await?;
        let raw = output.combined();
        let version = parse_nvidia_smi_output(&raw).ok_or_else(|| DetectionError::Parse {
            program: PROGRAM.to_string(),
            reason: "no 'CUDA Version' in banner".to_string(),
        })?;
        Ok(DetectedVersion { version, raw })
    }
}
