//! Install command generation for pip and conda.
//!
//! Commands are single-line strings meant to be pasted into a shell. Packages
//! without a version are left out entirely.

use crate::domain::VersionEntry;

/// Default base URL of the PyTorch wheel indexes.
pub const DEFAULT_INDEX_URL: &str = "https://download.pytorch.org/whl";

/// Options for pip command generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipOptions {
    /// Base URL the package index tag is appended to.
    pub index_url: String,
    /// Extra install tokens appended after the pinned packages.
    pub extras: Vec<String>,
}

impl Default for PipOptions {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            extras: Vec::new(),
        }
    }
}

impl PipOptions {
    /// Set the index base URL.
    #[must_use]
    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    /// Set extra install tokens.
    #[must_use]
    pub fn with_extras(mut self, extras: Vec<String>) -> Self {
        self.extras = extras;
        self
    }
}

/// Full index URL for a tag, e.g. `https://download.pytorch.org/whl/cu118`.
pub fn index_url_for_tag(base: &str, tag: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), tag)
}

/// Build a `pip install` command for `entry`.
///
/// ```
/// use cumatch_core::{PipOptions, VersionEntry, build_pip_command};
///
/// let entry = VersionEntry::new("2.1.2", "0.16.2", "2.1.2").with_tag("cu118");
/// assert_eq!(
///     build_pip_command(&entry, &PipOptions::default()),
///     "pip install torch==2.1.2 torchvision==0.16.2 torchaudio==2.1.2 \
///      --extra-index-url https://download.pytorch.org/whl/cu118"
/// );
/// ```
pub fn build_pip_command(entry: &VersionEntry, options: &PipOptions) -> String {
    let mut parts = vec!["pip".to_string(), "install".to_string()];
    parts.extend(pinned(entry, |name| name));
    parts.extend(
        options
            .extras
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string),
    );

    if let Some(tag) = entry.index_tag() {
        parts.push("--extra-index-url".to_string());
        parts.push(index_url_for_tag(&options.index_url, tag));
    }

    parts.join(" ")
}

/// Build a `conda install` command for `entry`.
///
/// Conda names the framework `pytorch`. CUDA tags (`cu*`) add a matching
/// `cudatoolkit` pin and the `nvidia` channel.
pub fn build_conda_command(entry: &VersionEntry) -> String {
    let mut parts = vec!["conda".to_string(), "install".to_string()];
    parts.extend(pinned(entry, |name| {
        if name == "torch" { "pytorch" } else { name }
    }));
    parts.push("-c".to_string());
    parts.push("pytorch".to_string());

    if let Some(toolkit) = entry.index_tag().and_then(conda_toolkit_version) {
        parts.push(format!("cudatoolkit={toolkit}"));
        parts.push("-c".to_string());
        parts.push("nvidia".to_string());
    }

    parts.join(" ")
}

/// Derive the `cudatoolkit` version from a `cu*` tag.
///
/// A 3-digit suffix becomes `XX.Y`, a 4-digit suffix `XX.YY`; any other
/// suffix is returned unchanged. Returns `None` for non-CUDA tags.
///
/// ```
/// use cumatch_core::conda_toolkit_version;
///
/// assert_eq!(conda_toolkit_version("cu118").as_deref(), Some("11.8"));
/// assert_eq!(conda_toolkit_version("cu1210").as_deref(), Some("12.10"));
/// assert_eq!(conda_toolkit_version("cpu"), None);
/// ```
pub fn conda_toolkit_version(tag: &str) -> Option<String> {
    let suffix = tag.strip_prefix("cu")?;
    let digits = suffix.bytes().all(|b| b.is_ascii_digit());
    let derived = match suffix.len() {
        3 | 4 if digits => format!("{}.{}", &suffix[..2], &suffix[2..]),
        _ => suffix.to_string(),
    };
    Some(derived)
}

fn pinned<'a>(
    entry: &'a VersionEntry,
    rename: impl Fn(&'static str) -> &'static str + 'a,
) -> impl Iterator<Item = String> + 'a {
    entry
        .packages()
        .into_iter()
        .filter_map(move |(name, version)| {
            let version = version.map(str::trim).filter(|v| !v.is_empty())?;
            Some(format!("{}=={version}", rename(name)))
        })
}
