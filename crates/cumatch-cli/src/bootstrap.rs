//! CLI bootstrap: the composition root.
//!
//! Validates settings, loads the version table and wires the runtime
//! detector and clipboard behind their core ports. Handlers only see the
//! resulting [`CliContext`].

use std::sync::Arc;

use tracing::debug;

use cumatch_core::{
    ClipboardPort, CudaDetector, MatchService, Settings, VersionTable, VersionsFileResolution,
    resolve_versions_file, validate_settings,
};
use cumatch_runtime::{SystemClipboard, default_detector};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Effective settings from flags, environment and defaults.
    pub settings: Settings,
}

impl CliConfig {
    /// Config over the given settings.
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Validated settings.
    pub settings: Settings,
    /// Resolution and command generation over the loaded table.
    pub matcher: MatchService,
    /// CUDA detection chain.
    pub detector: Arc<dyn CudaDetector>,
    /// Clipboard used by `--copy` and the interactive prompt.
    pub clipboard: Arc<dyn ClipboardPort>,
    /// How the table file was located.
    pub table_file: VersionsFileResolution,
}

impl CliContext {
    /// Matcher whose pip command also installs `extras`.
    pub fn matcher_with_extras(&self, extras: &[String]) -> MatchService {
        if extras.is_empty() {
            return self.matcher.clone();
        }
        self.matcher
            .with_pip_options(self.settings.pip_options(extras.to_vec()))
    }
}

/// Build the CLI context.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the version table file
/// exists but cannot be read or parsed.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let settings = config.settings;
    validate_settings(&settings)?;

    let table_file = resolve_versions_file(settings.versions_file.as_deref());
    let table = VersionTable::load(table_file.path.as_deref())?;
    debug!(
        origin = %table.origin(),
        lookup = %table_file.source,
        entries = table.len(),
        "Loaded version table"
    );

    let matcher = MatchService::new(Arc::new(table), settings.pip_options(Vec::new()));
    let detector: Arc<dyn CudaDetector> = Arc::new(default_detector(&settings));
    let clipboard: Arc<dyn ClipboardPort> = Arc::new(SystemClipboard::new());

    Ok(CliContext {
        settings,
        matcher,
        detector,
        clipboard,
        table_file,
    })
}
