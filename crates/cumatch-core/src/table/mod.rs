//! CUDA → PyTorch version table.
//!
//! The table is loaded once and is read-only afterwards. A JSON file shaped
//! like
//!
//! ```json
//! { "11.8": { "torch": "2.2.0", "torchvision": "0.15.2", "torchaudio": "2.2.2", "pip_tag": "cu118" } }
//! ```
//!
//! overrides the built-in table when present.

mod builtin;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{VersionEntry, is_valid_version_format};
use crate::errors::TableError;

/// Where a loaded table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOrigin {
    /// Compiled-in defaults.
    BuiltIn,
    /// A JSON file on disk.
    File(PathBuf),
    /// Constructed in code.
    Inline,
}

impl fmt::Display for TableOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => f.write_str("built-in table"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => f.write_str("inline table"),
        }
    }
}

/// Mapping from `major.minor` CUDA keys to recommended package versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTable {
    entries: BTreeMap<String, VersionEntry>,
    origin: TableOrigin,
}

impl VersionTable {
    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self {
            entries: builtin::builtin_entries().collect(),
            origin: TableOrigin::BuiltIn,
        }
    }

    /// Build a table from key/entry pairs, validating every key.
    pub fn from_entries<K, I>(entries: I) -> Result<Self, TableError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, VersionEntry)>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<BTreeMap<_, _>>();
        validate_keys(&entries)?;
        Ok(Self {
            entries,
            origin: TableOrigin::Inline,
        })
    }

    /// Parse a JSON document. `path` is only used for error messages.
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, TableError> {
        let entries: BTreeMap<String, VersionEntry> =
            serde_json::from_str(json).map_err(|e| TableError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        validate_keys(&entries)?;
        Ok(Self {
            entries,
            origin: TableOrigin::File(path.to_path_buf()),
        })
    }

    /// Read and parse a JSON table file.
    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let json = fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let table = Self::from_json_str(&json, path)?;
        debug!(path = %path.display(), entries = table.len(), "Loaded version table");
        Ok(table)
    }

    /// Load from `path` if it exists, otherwise fall back to the built-in table.
    ///
    /// A file that exists but cannot be parsed is an error rather than a
    /// silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self, TableError> {
        match path {
            Some(p) if p.exists() => Self::from_file(p),
            Some(p) => {
                warn!(path = %p.display(), "Version table not found, using built-in table");
                Ok(Self::builtin())
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Entry for an exact key.
    pub fn get(&self, key: &str) -> Option<&VersionEntry> {
        self.entries.get(key)
    }

    /// Stored key and entry for an exact key.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &VersionEntry)> {
        self.entries
            .get_key_value(key)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key/entry pairs in ascending lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where this table was loaded from.
    pub const fn origin(&self) -> &TableOrigin {
        &self.origin
    }
}

impl Default for VersionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_keys(entries: &BTreeMap<String, VersionEntry>) -> Result<(), TableError> {
    match entries.keys().find(|k| !is_valid_version_format(k)) {
        Some(bad) => Err(TableError::InvalidKey(bad.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "11.8": {"torch": "2.2.0", "torchvision": "0.15.2", "torchaudio": "2.2.2", "pip_tag": "cu118"},
        "10.2": {"torch": "1.9.0"}
    }"#;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = VersionTable::builtin();
        assert_eq!(table.len(), 8);
        assert_eq!(table.origin(), &TableOrigin::BuiltIn);
        assert!(table.keys().all(is_valid_version_format));
        let entry = table.get("11.8").unwrap();
        assert_eq!(entry.torch.as_deref(), Some("2.1.2"));
        assert_eq!(entry.index_tag(), Some("cu118"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = VersionTable::load(Some(file.path())).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.origin(), &TableOrigin::File(file.path().to_path_buf()));
        assert_eq!(table.get("11.8").unwrap().torch.as_deref(), Some("2.2.0"));
        let partial = table.get("10.2").unwrap();
        assert_eq!(partial.torchvision, None);
        assert_eq!(partial.pip_tag, None);
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("versions.json");
        let table = VersionTable::load(Some(&missing)).unwrap();
        assert_eq!(table, VersionTable::builtin());
    }

    #[test]
    fn test_no_path_uses_builtin() {
        assert_eq!(VersionTable::load(None).unwrap(), VersionTable::builtin());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = VersionTable::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, TableError::Parse { .. }));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let err = VersionTable::from_json_str(r#"{"11": {"torch": "2.0.0"}}"#, Path::new("t.json"))
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidKey(k) if k == "11"));

        let err = VersionTable::from_entries([("cuda11.8", VersionEntry::default())]).unwrap_err();
        assert!(matches!(err, TableError::InvalidKey(_)));
    }

    #[test]
    fn test_non_ascii_key_is_rejected() {
        let err = VersionTable::from_entries([("\u{661}\u{661}.\u{668}", VersionEntry::default())])
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidKey(_)));
    }

    #[test]
    fn test_keys_are_sorted() {
        let table = VersionTable::from_entries([
            ("12.1", VersionEntry::default()),
            ("11.8", VersionEntry::default()),
            ("11.10", VersionEntry::default()),
        ])
        .unwrap();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, ["11.10", "11.8", "12.1"]);
    }
}
