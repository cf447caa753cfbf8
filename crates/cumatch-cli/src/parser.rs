//! Main CLI parser and top-level argument handling.
//!
//! Every global option can also be set through a `CUMATCH_*` environment
//! variable or a `.env` file.

use std::path::PathBuf;

use clap::Parser;
use cumatch_core::{DEFAULT_DETECT_TIMEOUT_SECS, DEFAULT_INDEX_URL, DEFAULT_PYTHON, Settings};

use crate::commands::Commands;

/// Match a CUDA version to compatible PyTorch packages.
///
/// Without a subcommand the interactive prompt is started.
#[derive(Debug, Parser)]
#[command(name = "cumatch")]
#[command(about = "Find PyTorch, torchvision and torchaudio versions for a CUDA version")]
#[command(version)]
pub struct Cli {
    /// Version table JSON file to use instead of the default lookup
    #[arg(long = "versions-file", env = "CUMATCH_VERSIONS_FILE", global = true)]
    pub versions_file: Option<PathBuf>,

    /// Timeout in seconds for each detection tool
    #[arg(
        long,
        env = "CUMATCH_DETECT_TIMEOUT",
        default_value_t = DEFAULT_DETECT_TIMEOUT_SECS,
        global = true
    )]
    pub timeout: f64,

    /// Python interpreter used to inspect an installed torch
    #[arg(long, env = "CUMATCH_PYTHON", default_value = DEFAULT_PYTHON, global = true)]
    pub python: String,

    /// Base URL of the PyTorch wheel index
    #[arg(long = "index-url", env = "CUMATCH_INDEX_URL", default_value = DEFAULT_INDEX_URL, global = true)]
    pub index_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings assembled from the global options.
    pub fn settings(&self) -> Settings {
        Settings {
            versions_file: self.versions_file.clone(),
            detect_timeout_secs: self.timeout,
            python: self.python.clone(),
            index_url: self.index_url.clone(),
        }
    }
}
