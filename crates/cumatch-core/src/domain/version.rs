//! CUDA version parsing and normalization.
//!
//! Versions are handled as `major.minor` strings. Anything after the minor
//! component (patch level, build suffixes) is discarded during normalization.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static LEADING_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)").expect("valid leading version regex"));

static STRICT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid strict version regex"));

/// A normalized `major.minor` CUDA version.
///
/// Components are kept as digit strings so that table keys can be compared
/// without loss; `minor_value` is the numeric minor when it fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CudaVersion {
    major: String,
    minor: String,
    minor_value: Option<u32>,
}

impl CudaVersion {
    /// Normalize a raw version string by taking its leading `\d+\.\d+`.
    ///
    /// Leading and trailing whitespace is ignored. Returns `None` when the
    /// string does not start with a `major.minor` pair.
    ///
    /// ```
    /// use cumatch_core::CudaVersion;
    ///
    /// let v = CudaVersion::normalize("12.1.105").unwrap();
    /// assert_eq!(v.key(), "12.1");
    /// assert!(CudaVersion::normalize("release 12.1").is_none());
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        let caps = LEADING_VERSION.captures(raw.trim())?;
        let major = caps.get(1)?.as_str().to_string();
        let minor = caps.get(2)?.as_str().to_string();
        let minor_value = minor.parse::<u32>().ok();
        Some(Self {
            major,
            minor,
            minor_value,
        })
    }

    /// Parse a string that must be exactly `major.minor`.
    pub fn parse_strict(raw: &str) -> Option<Self> {
        if is_valid_version_format(raw) {
            Self::normalize(raw)
        } else {
            None
        }
    }

    /// Major component as written.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Minor component as written.
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Numeric minor component, if representable.
    pub const fn minor_value(&self) -> Option<u32> {
        self.minor_value
    }

    /// Table lookup key (`major.minor`).
    pub fn key(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for CudaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Check that user input is exactly `major.minor` (e.g. `11.8`), ASCII digits only.
pub fn is_valid_version_format(raw: &str) -> bool {
    STRICT_VERSION.is_match(raw)
}
