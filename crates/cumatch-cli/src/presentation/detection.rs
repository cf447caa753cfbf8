//! Display of detection results.

use cumatch_core::DetectionResult;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Print the outcome of a detection run, including failed strategies.
pub fn print_detection(result: &DetectionResult) {
    println!("{BOLD}CUDA detection:{RESET}");
    println!("{}", "-".repeat(40));

    for attempt in &result.attempts {
        println!(
            "  {YELLOW}○ {:<11}{RESET} {}",
            attempt.source.as_str(),
            attempt.error
        );
    }

    match &result.version {
        Some(version) => {
            println!(
                "  {GREEN}✓ {:<11}{RESET} CUDA {version}",
                result.source.as_str()
            );
            if let Some(raw) = result.raw.as_deref() {
                // Only the line the version was read from
                if let Some(line) = raw.lines().find(|l| l.contains(version.as_str())) {
                    println!("    {}", line.trim());
                }
            }
        }
        None => {
            let error = result.error.as_deref().unwrap_or("Unable to detect CUDA version");
            println!("  {RED}✗ {error}{RESET}");
        }
    }
}
