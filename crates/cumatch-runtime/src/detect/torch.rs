//! Installed-framework probe: asks Python for `torch.version.cuda`.

use std::time::Duration;

use async_trait::async_trait;
use cumatch_core::{
    CudaVersion, DetectedVersion, DetectionError, DetectionOutcome, DetectionSource,
    DetectionStrategy,
};

use crate::process::run_tool;

const SNIPPET: &str = "import torch; print(torch.version.cuda or '')";

/// Normalize the CUDA version printed by the snippet.
///
/// CPU-only builds print an empty line; that is a parse failure so the
/// next strategy gets a chance.
pub fn parse_torch_output(output: &str) -> Result<String, String> {
    let line = output.lines().map(str::trim).find(|l| !l.is_empty());
    match line {
        None => Err("torch is installed without CUDA support".to_string()),
        Some(l) => CudaVersion::normalize(l)
            .map(|v| v.key())
            .ok_or_else(|| format!("unexpected torch.version.cuda value '{l}'")),
    }
}

/// Detects the CUDA version an installed `torch` was built against.
#[derive(Debug, Clone)]
pub struct TorchProbe {
    python: String,
    timeout: Duration,
}

impl TorchProbe {
    /// Create a probe using the given interpreter.
    pub fn new(python: impl Into<String>, timeout: Duration) -> Self {
        Self {
            python: python.into(),
            timeout,
        }
    }

    /// Interpreter this probe runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

#[async_trait]
impl DetectionStrategy for TorchProbe {
    fn source(&self) -> DetectionSource {
        DetectionSource::Framework
    }

    async fn detect(&self) -> DetectionOutcome {
        let output = run_tool(&self.python, &["-c", SNIPPET], self.timeout).await?;
        let version = parse_torch_output(&output.stdout).map_err(|reason| DetectionError::Parse {
            program: self.python.clone(),
            reason,
        })?;
        Ok(DetectedVersion {
            version,
            raw: output.stdout.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        assert_eq!(parse_torch_output("11.8\n"), Ok("11.8".to_string()));
    }

    #[test]
    fn test_parse_strips_patch_level() {
        assert_eq!(parse_torch_output("12.1.105\n"), Ok("12.1".to_string()));
    }

    #[test]
    fn test_parse_cpu_build() {
        assert!(parse_torch_output("\n").is_err());
        assert!(parse_torch_output("").is_err());
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_torch_output("None\n").unwrap_err();
        assert!(err.contains("None"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fake_interpreter() {
        // `sh -c <snippet>` fails, which stands in for "torch not importable".
        let probe = TorchProbe::new("sh", Duration::from_secs(2));
        let err = probe.detect().await.unwrap_err();
        assert!(matches!(err, DetectionError::NonZeroExit { .. }));
    }
}
