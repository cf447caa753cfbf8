//! System clipboard through platform copy utilities.
//!
//! Backends are tried in order; the text is piped to the tool's stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use cumatch_core::{ClipboardError, ClipboardPort};
use tracing::debug;

/// A copy utility and the arguments that make it read stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardBackend {
    /// Program to run.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl ClipboardBackend {
    /// Describe a backend.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    fn copy(&self, text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Drop stdin before waiting so the tool sees EOF; reap the child
        // even when the write fails.
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

/// Copy utilities available on this platform, in preference order.
pub fn platform_backends() -> Vec<ClipboardBackend> {
    if cfg!(target_os = "macos") {
        vec![ClipboardBackend::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![ClipboardBackend::new("clip", &[])]
    } else {
        vec![
            ClipboardBackend::new("wl-copy", &[]),
            ClipboardBackend::new("xclip", &["-selection", "clipboard"]),
            ClipboardBackend::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Clipboard backed by external copy utilities.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    backends: Vec<ClipboardBackend>,
}

impl SystemClipboard {
    /// Clipboard using [`platform_backends`].
    pub fn new() -> Self {
        Self::with_backends(platform_backends())
    }

    /// Clipboard using an explicit backend list.
    pub const fn with_backends(backends: Vec<ClipboardBackend>) -> Self {
        Self { backends }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for SystemClipboard {
    fn copy(&self, text: &str) -> Result<String, ClipboardError> {
        for backend in &self.backends {
            match backend.copy(text) {
                Ok(true) => return Ok(backend.program.clone()),
                Ok(false) => debug!(program = %backend.program, "Clipboard backend exited with failure"),
                Err(e) => debug!(program = %backend.program, error = %e, "Clipboard backend unavailable"),
            }
        }

        Err(ClipboardError::Unavailable {
            tried: self.backends.iter().map(|b| b.program.clone()).collect(),
        })
    }
}
