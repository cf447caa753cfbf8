//! Built-in compatibility table used when no JSON file is available.

use crate::domain::VersionEntry;

/// `(cuda, torch, torchvision, torchaudio, pip_tag)` rows.
///
/// 12.4 and 12.5 reuse the `cu121` wheels, which run on newer 12.x drivers.
const ROWS: &[(&str, &str, &str, &str, &str)] = &[
    ("10.2", "1.13.1", "0.14.1", "0.13.1", "cu102"),
    ("11.3", "1.13.1", "0.14.1", "0.13.1", "cu113"),
    ("11.6", "1.13.1", "0.14.1", "0.13.1", "cu116"),
    ("11.7", "2.0.1", "0.15.2", "0.15.1", "cu117"),
    ("11.8", "2.1.2", "0.16.2", "2.1.2", "cu118"),
    ("12.1", "2.2.2", "0.17.2", "2.2.2", "cu121"),
    ("12.4", "2.3.1", "0.18.1", "2.3.1", "cu121"),
    ("12.5", "2.4.1", "0.19.1", "2.4.1", "cu121"),
];

pub(super) fn builtin_entries() -> impl Iterator<Item = (String, VersionEntry)> {
    ROWS.iter().map(|(cuda, torch, vision, audio, tag)| {
        (
            (*cuda).to_string(),
            VersionEntry::new(*torch, *vision, *audio).with_tag(*tag),
        )
    })
}
