//! Match service: validation, resolution and command generation in one step.

use std::sync::Arc;

use tracing::{debug, info};

use crate::command::{PipOptions, build_conda_command, build_pip_command};
use crate::domain::{
    CudaVersion, DetectionResult, DetectionSource, ResolutionResult, is_valid_version_format,
};
use crate::errors::MatchError;
use crate::resolver::resolve_version;
use crate::table::VersionTable;

/// Turns requested CUDA versions into [`ResolutionResult`]s.
///
/// Holds the read-only table behind an `Arc`, so clones are cheap and can be
/// shared between callers.
#[derive(Debug, Clone)]
pub struct MatchService {
    table: Arc<VersionTable>,
    pip: PipOptions,
}

impl MatchService {
    /// Create a service over `table`.
    pub const fn new(table: Arc<VersionTable>, pip: PipOptions) -> Self {
        Self { table, pip }
    }

    /// The table this service resolves against.
    pub fn table(&self) -> &VersionTable {
        &self.table
    }

    /// Pip options used for command generation.
    pub const fn pip_options(&self) -> &PipOptions {
        &self.pip
    }

    /// Same service with different pip options.
    #[must_use]
    pub fn with_pip_options(&self, pip: PipOptions) -> Self {
        Self {
            table: Arc::clone(&self.table),
            pip,
        }
    }

    /// Resolve a `major.minor` version string.
    ///
    /// `source` is the detection provenance, or `None` for manual entry.
    pub fn match_version(
        &self,
        requested: &str,
        source: Option<DetectionSource>,
    ) -> Result<ResolutionResult, MatchError> {
        let requested = requested.trim();
        if !is_valid_version_format(requested) {
            return Err(MatchError::InvalidInputFormat(requested.to_string()));
        }
        let version = CudaVersion::normalize(requested)
            .ok_or_else(|| MatchError::InvalidInputFormat(requested.to_string()))?;

        let resolution = resolve_version(&version, &self.table)
            .ok_or_else(|| MatchError::NoMappingFound(requested.to_string()))?;

        if resolution.kind.is_fallback() {
            info!(
                requested,
                matched = resolution.matched_key,
                "No exact mapping, using closest compatible CUDA version"
            );
        } else {
            debug!(requested, "Exact mapping found");
        }

        let entry = resolution.entry.clone();
        Ok(ResolutionResult {
            requested: requested.to_string(),
            source,
            matched_key: resolution.matched_key.to_string(),
            match_kind: resolution.kind,
            pip_command: build_pip_command(&entry, &self.pip),
            conda_command: build_conda_command(&entry),
            entry,
            gpu_info: None,
        })
    }

    /// Resolve the version found by a detection run.
    pub fn match_detection(
        &self,
        detection: &DetectionResult,
    ) -> Result<ResolutionResult, MatchError> {
        match detection.version.as_deref() {
            Some(version) => self.match_version(version, Some(detection.source)),
            None => Err(MatchError::DetectionFailed(describe_failure(detection))),
        }
    }
}

fn describe_failure(detection: &DetectionResult) -> String {
    let summary = detection
        .error
        .clone()
        .unwrap_or_else(|| "Unable to detect CUDA version".to_string());
    if detection.attempts.is_empty() {
        return summary;
    }
    let details = detection
        .attempts
        .iter()
        .map(|a| format!("{}: {}", a.source, a.error))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{summary} ({details})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DetectionAttempt, MatchKind, VersionEntry};

    fn service() -> MatchService {
        let table = VersionTable::from_entries([(
            "11.8",
            VersionEntry::new("2.2.0", "0.15.2", "2.2.2").with_tag("cu118"),
        )])
        .unwrap();
        MatchService::new(Arc::new(table), PipOptions::default())
    }

    #[test]
    fn test_match_fallback_builds_commands() {
        let result = service().match_version("11.7", None).unwrap();
        assert_eq!(result.requested, "11.7");
        assert_eq!(result.matched_key, "11.8");
        assert_eq!(result.match_kind, MatchKind::NearestMinor);
        assert_eq!(result.source_label(), "manual");
        assert!(result.pip_command.contains("torch==2.2.0"));
        assert!(result.conda_command.contains("cudatoolkit=11.8"));
    }

    #[test]
    fn test_invalid_format() {
        for bad in ["11", "11.8.1", "abc", ""] {
            assert_eq!(
                service().match_version(bad, None),
                Err(MatchError::InvalidInputFormat(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_no_mapping() {
        assert_eq!(
            service().match_version("12.1", None),
            Err(MatchError::NoMappingFound("12.1".to_string()))
        );
    }

    #[test]
    fn test_match_detection_success() {
        let detection = DetectionResult {
            source: DetectionSource::CompilerTool,
            version: Some("11.8".to_string()),
            raw: Some("release 11.8".to_string()),
            error: None,
            attempts: Vec::new(),
        };
        let result = service().match_detection(&detection).unwrap();
        assert_eq!(result.source, Some(DetectionSource::CompilerTool));
        assert_eq!(result.match_kind, MatchKind::Exact);
    }

    #[test]
    fn test_match_detection_failure_lists_attempts() {
        let detection = DetectionResult::not_detected(vec![DetectionAttempt {
            source: DetectionSource::CompilerTool,
            error: "nvcc not found".to_string(),
        }]);
        let err = service().match_detection(&detection).unwrap_err();
        assert_eq!(
            err,
            MatchError::DetectionFailed(
                "Unable to detect CUDA version (nvcc: nvcc not found)".to_string()
            )
        );
    }

    #[test]
    fn test_with_pip_options_shares_table() {
        let base = service();
        let custom = base.with_pip_options(PipOptions::default().with_extras(vec!["xformers".into()]));
        assert_eq!(custom.table(), base.table());
        let result = custom.match_version("11.8", None).unwrap();
        assert!(result.pip_command.contains(" xformers "));
    }
}
