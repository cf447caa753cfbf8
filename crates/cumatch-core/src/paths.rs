//! Version table file discovery.
//!
//! Resolution order:
//! 1. explicit path (`--versions-file` / `CUMATCH_VERSIONS_FILE`)
//! 2. `data/versions.json` in the working directory
//! 3. `<config dir>/cumatch/versions.json`
//! 4. none, meaning the built-in table

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Table file location relative to the working directory.
pub const DEFAULT_VERSIONS_FILE_RELATIVE: &str = "data/versions.json";

/// Application directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "cumatch";

/// Table file name under the application config dir.
pub const VERSIONS_FILE_NAME: &str = "versions.json";

/// How the table file path was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionsFileSource {
    /// Given on the command line or in the environment.
    Explicit,
    /// Found under the working directory.
    WorkingDirectory,
    /// Found in the user config directory.
    UserConfig,
    /// No file; the built-in table applies.
    BuiltIn,
}

impl fmt::Display for VersionsFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "explicit",
            Self::WorkingDirectory => "working directory",
            Self::UserConfig => "user config",
            Self::BuiltIn => "built-in",
        };
        f.write_str(label)
    }
}

/// Result of table file discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionsFileResolution {
    /// File to load, if any.
    pub path: Option<PathBuf>,
    /// Why this path was chosen.
    pub source: VersionsFileSource,
}

/// `<config dir>/cumatch/versions.json`, if the platform has a config dir.
pub fn user_versions_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(VERSIONS_FILE_NAME))
}

/// Discover the table file using the current directory and user config dir.
pub fn resolve_versions_file(explicit: Option<&Path>) -> VersionsFileResolution {
    let cwd = env::current_dir().ok();
    resolve_versions_file_in(explicit, cwd.as_deref(), user_versions_file().as_deref())
}

/// Discover the table file relative to the given directories.
///
/// An explicit path is returned even when it does not exist so the loader
/// can warn about it.
pub fn resolve_versions_file_in(
    explicit: Option<&Path>,
    cwd: Option<&Path>,
    user_file: Option<&Path>,
) -> VersionsFileResolution {
    if let Some(path) = explicit {
        return VersionsFileResolution {
            path: Some(path.to_path_buf()),
            source: VersionsFileSource::Explicit,
        };
    }

    if let Some(local) = cwd.map(|d| d.join(DEFAULT_VERSIONS_FILE_RELATIVE))
        && local.is_file()
    {
        return VersionsFileResolution {
            path: Some(local),
            source: VersionsFileSource::WorkingDirectory,
        };
    }

    if let Some(user) = user_file.filter(|p| p.is_file()) {
        return VersionsFileResolution {
            path: Some(user.to_path_buf()),
            source: VersionsFileSource::UserConfig,
        };
    }

    VersionsFileResolution {
        path: None,
        source: VersionsFileSource::BuiltIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_wins_even_if_missing() {
        let res = resolve_versions_file_in(Some(Path::new("/nonexistent/v.json")), None, None);
        assert_eq!(res.source, VersionsFileSource::Explicit);
        assert_eq!(res.path, Some(PathBuf::from("/nonexistent/v.json")));
    }

    #[test]
    fn test_working_directory_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join(DEFAULT_VERSIONS_FILE_RELATIVE), "{}").unwrap();

        let res = resolve_versions_file_in(None, Some(dir.path()), None);
        assert_eq!(res.source, VersionsFileSource::WorkingDirectory);
        assert_eq!(
            res.path,
            Some(dir.path().join(DEFAULT_VERSIONS_FILE_RELATIVE))
        );
    }

    #[test]
    fn test_user_config_file() {
        let cwd = tempfile::tempdir().unwrap();
        let config = tempfile::tempdir().unwrap();
        let user = config.path().join(VERSIONS_FILE_NAME);
        fs::write(&user, "{}").unwrap();

        let res = resolve_versions_file_in(None, Some(cwd.path()), Some(&user));
        assert_eq!(res.source, VersionsFileSource::UserConfig);
        assert_eq!(res.path, Some(user));
    }

    #[test]
    fn test_nothing_found_means_builtin() {
        let cwd = tempfile::tempdir().unwrap();
        let missing = cwd.path().join("nope.json");
        let res = resolve_versions_file_in(None, Some(cwd.path()), Some(&missing));
        assert_eq!(res.source, VersionsFileSource::BuiltIn);
        assert_eq!(res.path, None);
    }
}
