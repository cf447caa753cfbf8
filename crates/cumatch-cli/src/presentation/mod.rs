//! Presentation layer for CLI output.
//!
//! Formatting lives here so handlers stay thin. Functions returning
//! `String` are plain text; `print_*` functions write to stdout and may
//! use ANSI colors.

pub mod detection;
pub mod summary;
pub mod tables;

pub use detection::print_detection;
pub use summary::render_summary;
pub use tables::{format_optional, print_separator, print_version_table, render_table_rows};
