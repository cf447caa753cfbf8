//! Command-line adapter for cumatch.
//!
//! `main.rs` parses arguments, builds a [`CliContext`] through
//! [`bootstrap`] and dispatches to the handlers in [`handlers`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependency used by integration tests
#[cfg(test)]
use tempfile as _;

// Used by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, OutputArgs};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
