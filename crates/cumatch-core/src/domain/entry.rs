//! Version table entry types.

use serde::{Deserialize, Serialize};

/// Package versions recommended for one CUDA version.
///
/// `torch` is the framework; `torchvision` and `torchaudio` are its
/// companion libraries. Any of them may be absent, in which case the
/// package is left out of generated commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionEntry {
    /// Framework (`torch`) version.
    pub torch: Option<String>,
    /// `torchvision` version.
    pub torchvision: Option<String>,
    /// `torchaudio` version.
    pub torchaudio: Option<String>,
    /// Package index tag such as `cu118`. Absent means a CPU-only install.
    pub pip_tag: Option<String>,
}

impl VersionEntry {
    /// Create an entry with all three packages pinned.
    pub fn new(
        torch: impl Into<String>,
        torchvision: impl Into<String>,
        torchaudio: impl Into<String>,
    ) -> Self {
        Self {
            torch: Some(torch.into()),
            torchvision: Some(torchvision.into()),
            torchaudio: Some(torchaudio.into()),
            pip_tag: None,
        }
    }

    /// Set the package index tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.pip_tag = Some(tag.into());
        self
    }

    /// Framework version.
    pub fn framework_version(&self) -> Option<&str> {
        self.torch.as_deref()
    }

    /// Companion versions in fixed order (`torchvision`, `torchaudio`).
    pub fn companion_versions(&self) -> [Option<&str>; 2] {
        [self.torchvision.as_deref(), self.torchaudio.as_deref()]
    }

    /// Package index tag, ignoring empty strings.
    pub fn index_tag(&self) -> Option<&str> {
        self.pip_tag.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Pip package names paired with their versions, framework first.
    pub fn packages(&self) -> [(&'static str, Option<&str>); 3] {
        let [vision, audio] = self.companion_versions();
        [
            ("torch", self.framework_version()),
            ("torchvision", vision),
            ("torchaudio", audio),
        ]
    }
}
