//! Command handlers.
//!
//! Handlers are thin wrappers that:
//!   1. Call the matcher or detector from the [`CliContext`]
//!   2. Format output for the terminal
//!
//! Errors are returned to `main`, which maps them to exit codes.
//!
//! [`CliContext`]: crate::bootstrap::CliContext

pub mod auto;
pub mod detect;
pub mod gpu;
pub mod interactive;
pub mod match_version;
pub mod table;

mod output;

#[cfg(test)]
mod test_support;
