//! CUDA compiler (`nvcc --version`) probe.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use cumatch_core::{
    DetectedVersion, DetectionError, DetectionOutcome, DetectionSource, DetectionStrategy,
};
use regex::Regex;

use crate::process::run_tool;

const PROGRAM: &str = "nvcc";

// "Cuda compilation tools, release 12.0, V12.0.140"
static RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)release\s+([0-9]+\.[0-9]+)").expect("valid nvcc release regex"));

/// Extract `major.minor` from `nvcc --version` output.
pub fn parse_nvcc_output(output: &str) -> Option<String> {
    RELEASE
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detects the toolkit version through the CUDA compiler.
#[derive(Debug, Clone)]
pub struct NvccProbe {
    timeout: Duration,
}

impl NvccProbe {
    /// Create a probe with the given per-invocation timeout.
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DetectionStrategy for NvccProbe {
    fn source(&self) -> DetectionSource {
        DetectionSource::CompilerTool
    }

    async fn detect(&self) -> DetectionOutcome {
        let output = run_tool(PROGRAM, &["--version"], self.timeout).await?;
        let raw = output.combined();
        let version = parse_nvcc_output(&raw).ok_or_else(|| DetectionError::Parse {
            program: PROGRAM.to_string(),
            reason: "no 'release X.Y' line".to_string(),
        })?;
        Ok(DetectedVersion { version, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NVCC_OUTPUT: &str = "nvcc: NVIDIA (R) Cuda compiler driver\n\
        Copyright (c) 2005-2022 NVIDIA Corporation\n\
        Built on Wed_Sep_21_10:33:58_PDT_2022\n\
        Cuda compilation tools, release 11.8, V11.8.89\n\
        Build cuda_11.8.r11.8/compiler.31833905_0\n";

    #[test]
    fn test_parse_full_output() {
        assert_eq!(parse_nvcc_output(NVCC_OUTPUT).as_deref(), Some("11.8"));
    }

    #[test]
    fn test_parse_short_line() {
        assert_eq!(
            parse_nvcc_output("Cuda compilation tools, release 11.7, V11.7.64\n").as_deref(),
            Some("11.7")
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_nvcc_output("RELEASE 12.4").as_deref(), Some("12.4"));
    }

    #[test]
    fn test_parse_failure() {
        assert_eq!(parse_nvcc_output("command not found"), None);
        assert_eq!(parse_nvcc_output(""), None);
    }

    #[test]
    fn test_source() {
        assert_eq!(
            NvccProbe::new(Duration::from_secs(2)).source(),
            DetectionSource::CompilerTool
        );
    }
}
