//! Clipboard port.
//!
//! Copying is best-effort: callers report a failure and carry on.

use thiserror::Error;

/// Clipboard failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// Every backend was tried and none accepted the text.
    #[error("no clipboard backend available (tried: {})", .tried.join(", "))]
    Unavailable { tried: Vec<String> },
}

/// Port for placing text on the system clipboard.
pub trait ClipboardPort: Send + Sync {
    /// Copy `text`, returning the name of the backend that accepted it.
    fn copy(&self, text: &str) -> Result<String, ClipboardError>;
}
