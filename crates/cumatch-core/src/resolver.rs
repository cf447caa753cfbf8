//! Version resolution with nearest-minor fallback.
//!
//! Lookup order for a requested version:
//! 1. exact `major.minor` key,
//! 2. closest minor among keys with the same major (ties go to the newer minor),
//! 3. lexicographically largest key of that major when the requested minor
//!    cannot be compared numerically.

use crate::domain::{CudaVersion, MatchKind, VersionEntry};
use crate::table::VersionTable;

/// A table entry chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Key of the chosen entry.
    pub matched_key: &'a str,
    /// How the key was chosen.
    pub kind: MatchKind,
    /// The chosen entry.
    pub entry: &'a VersionEntry,
}

/// Resolve a requested CUDA version against `table`.
///
/// Returns `None` for an absent request, a request without a leading
/// `major.minor`, or a major that has no entries. Never panics.
///
/// ```
/// use cumatch_core::{VersionEntry, VersionTable, resolve};
///
/// let table = VersionTable::from_entries([
///     ("11.6", VersionEntry::new("1.13.1", "0.14.1", "0.13.1")),
///     ("11.8", VersionEntry::new("2.1.2", "0.16.2", "2.1.2")),
/// ])
/// .unwrap();
///
/// assert_eq!(resolve(Some("11.7"), &table).unwrap().matched_key, "11.8");
/// assert!(resolve(Some("12.1"), &table).is_none());
/// ```
pub fn resolve<'a>(requested: Option<&str>, table: &'a VersionTable) -> Option<Resolution<'a>> {
    let version = CudaVersion::normalize(requested?)?;
    resolve_version(&version, table)
}

/// Resolve an already-normalized version.
pub fn resolve_version<'a>(
    version: &CudaVersion,
    table: &'a VersionTable,
) -> Option<Resolution<'a>> {
    let key = version.key();
    if let Some((matched_key, entry)) = table.get_key_value(&key) {
        return Some(Resolution {
            matched_key,
            kind: MatchKind::Exact,
            entry,
        });
    }

    let candidates: Vec<(&'a str, &'a VersionEntry)> = table
        .iter()
        .filter(|(k, _)| major_of(k) == Some(version.major()))
        .collect();

    let (matched_key, entry, kind) = match version.minor_value() {
        Some(target) => {
            let (k, e) = candidates
                .into_iter()
                // Smallest distance first; on equal distance the larger minor wins.
                .min_by_key(|(k, _)| {
                    let m = minor_of(k);
                    (m.abs_diff(target), std::cmp::Reverse(m))
                })?;
            (k, e, MatchKind::NearestMinor)
        }
        None => {
            let (k, e) = candidates.into_iter().max_by_key(|(k, _)| *k)?;
            (k, e, MatchKind::NewestInMajor)
        }
    };

    Some(Resolution {
        matched_key,
        kind,
        entry,
    })
}

fn major_of(key: &str) -> Option<&str> {
    key.split_once('.').map(|(major, _)| major)
}

/// Numeric minor of a validated key. Minors too large for `u32` saturate,
/// so such keys still compete as the farthest-out candidates.
fn minor_of(key: &str) -> u32 {
    key.split_once('.')
        .map_or(u32::MAX, |(_, minor)| minor.parse().unwrap_or(u32::MAX))
}
