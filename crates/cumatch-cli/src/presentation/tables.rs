//! Table formatting utilities for CLI output.

use cumatch_core::VersionTable;

/// Format an optional value for table display, returning a default if None.
pub fn format_optional(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One formatted row per table key, in key order.
pub fn render_table_rows(table: &VersionTable) -> Vec<String> {
    table
        .iter()
        .map(|(key, entry)| {
            let [torch, vision, audio] = entry.packages().map(|(_, v)| format_optional(v, "--"));
            format!(
                "{key:<6} {torch:<10} {vision:<12} {audio:<11} {}",
                format_optional(entry.index_tag(), "--")
            )
        })
        .collect()
}

/// Print the whole table with a header.
pub fn print_version_table(table: &VersionTable) {
    println!(
        "Version table: {} ({} entries)\n",
        table.origin(),
        table.len()
    );
    println!(
        "{:<6} {:<10} {:<12} {:<11} Tag",
        "CUDA", "torch", "torchvision", "torchaudio"
    );
    print_separator(50);
    for row in render_table_rows(table) {
        println!("{row}");
    }
}
