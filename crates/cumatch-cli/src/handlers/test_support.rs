//! Fakes for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cumatch_core::{
    ClipboardError, ClipboardPort, CudaDetector, DetectionResult, MatchService, PipOptions,
    Settings, VersionEntry, VersionTable, VersionsFileResolution, VersionsFileSource,
};

use crate::bootstrap::CliContext;

/// Detector returning a fixed result.
pub(crate) struct FixedDetector(pub DetectionResult);

#[async_trait]
impl CudaDetector for FixedDetector {
    async fn detect(&self) -> DetectionResult {
        self.0.clone()
    }
}

/// Clipboard recording copied text in memory.
#[derive(Default)]
pub(crate) struct MemoryClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub(crate) fn failing() -> Self {
        Self {
            copied: Mutex::default(),
            fail: true,
        }
    }

    pub(crate) fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl ClipboardPort for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<String, ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable {
                tried: vec!["memory".to_string()],
            });
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok("memory".to_string())
    }
}

/// Context over a two-entry table with the given fakes.
pub(crate) fn context(detection: DetectionResult, clipboard: Arc<MemoryClipboard>) -> CliContext {
    let table = VersionTable::from_entries([
        (
            "11.8",
            VersionEntry::new("2.2.0", "0.15.2", "2.2.2").with_tag("cu118"),
        ),
        (
            "12.1",
            VersionEntry::new("2.2.2", "0.17.2", "2.2.2").with_tag("cu121"),
        ),
    ])
    .unwrap();

    CliContext {
        settings: Settings::default(),
        matcher: MatchService::new(Arc::new(table), PipOptions::default()),
        detector: Arc::new(FixedDetector(detection)),
        clipboard,
        table_file: VersionsFileResolution {
            path: None,
            source: VersionsFileSource::BuiltIn,
        },
    }
}
