//! The value produced by one "match" action.

use serde::{Deserialize, Serialize};

use super::detection::DetectionSource;
use super::entry::VersionEntry;

/// How a table key was chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The normalized request was a table key.
    Exact,
    /// Closest minor within the same major.
    NearestMinor,
    /// Newest key within the same major (request minor not comparable).
    NewestInMajor,
}

impl MatchKind {
    /// Whether the matched key differs from the request.
    pub const fn is_fallback(&self) -> bool {
        !matches!(self, Self::Exact)
    }
}

/// Everything the presentation layer needs after resolving a version.
///
/// Built once per request and never modified; rendering and the clipboard
/// action both read from this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Version as requested (typed or detected).
    pub requested: String,
    /// Detection provenance; `None` for manual entry.
    pub source: Option<DetectionSource>,
    /// Table key that was used.
    pub matched_key: String,
    /// How the key was chosen.
    pub match_kind: MatchKind,
    /// Resolved package versions.
    #[serde(flatten)]
    pub entry: VersionEntry,
    /// Ready-to-run pip command.
    pub pip_command: String,
    /// Ready-to-run conda command.
    pub conda_command: String,
    /// Optional GPU status text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_info: Option<String>,
}

impl ResolutionResult {
    /// Provenance label for display.
    pub fn source_label(&self) -> &'static str {
        self.source.map_or("manual", |s| s.as_str())
    }

    /// Attach GPU status text.
    #[must_use]
    pub fn with_gpu_info(mut self, info: impl Into<String>) -> Self {
        self.gpu_info = Some(info.into());
        self
    }
}
