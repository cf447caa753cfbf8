//! `cumatch table`.

use std::collections::BTreeMap;

use anyhow::Result;

use cumatch_core::{VersionEntry, VersionsFileSource};

use crate::bootstrap::CliContext;
use crate::presentation::print_version_table;

/// Print the effective version table.
///
/// The JSON form is a valid versions file and can be saved and edited.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let table = ctx.matcher.table();

    if json {
        let doc: BTreeMap<&str, &VersionEntry> = table.iter().collect();
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print_version_table(table);
    if ctx.table_file.source == VersionsFileSource::BuiltIn {
        println!();
        println!("Override with --versions-file or data/versions.json");
    }
    Ok(())
}
