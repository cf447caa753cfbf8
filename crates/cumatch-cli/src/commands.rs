//! Subcommands of the `cumatch` binary.

use clap::{Args, Subcommand};

/// Output options shared by commands that produce a match.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the pip command to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Extra package to append to the pip command (repeatable)
    #[arg(long = "extra", value_name = "PKG")]
    pub extras: Vec<String>,

    /// Include NVIDIA GPU status in the output
    #[arg(long = "gpu-info")]
    pub gpu_info: bool,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive prompt (default)
    Interactive,

    /// Resolve a CUDA version such as 11.8
    Match {
        /// CUDA version in major.minor form
        version: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Detect the local CUDA version and resolve it
    Auto {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Detect the local CUDA version
    Detect {
        /// Print the detection result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the effective version table
    Table {
        /// Print the table as a JSON document
        #[arg(long)]
        json: bool,
    },

    /// Show NVIDIA GPU status
    Gpu,
}
