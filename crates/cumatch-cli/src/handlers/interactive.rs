//! Interactive prompt.
//!
//! Every failure (bad input, no mapping, detection failure, clipboard
//! failure, unreadable input) is reported and the prompt is shown again.
//! Only `q`, closing stdin or repeated read errors end the session.

use std::io::{self, BufRead};

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::render_summary;
use crate::utils::input::{prompt_confirmation, prompt_line};

use super::output;

const MENU: &str = "\nSelect an option:\n  1) Enter CUDA version manually\n  2) Auto-detect CUDA version\n  q) Quit";

/// Consecutive read errors after which the session ends.
const MAX_READ_FAILURES: u32 = 3;

enum Answer {
    Line(String),
    Retry,
    Closed,
}

/// Read one answer. Read errors are reported and turn into a retry until
/// too many happen in a row.
fn read_answer<R: BufRead>(input: &mut R, prompt: &str, failures: &mut u32) -> Answer {
    match prompt_line(input, prompt) {
        Ok(Some(line)) => {
            *failures = 0;
            Answer::Line(line)
        }
        Ok(None) => Answer::Closed,
        Err(err) => {
            *failures += 1;
            eprintln!("Error: {err:#}");
            if *failures >= MAX_READ_FAILURES {
                eprintln!("Too many input errors, leaving.");
                Answer::Closed
            } else {
                Answer::Retry
            }
        }
    }
}

/// Run the interactive prompt on stdin.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(ctx, &mut input).await;
    Ok(())
}

/// Run the prompt on `input`, returning how many matches were shown.
///
/// Ends on `q` or when `input` is closed.
pub async fn run<R: BufRead>(ctx: &CliContext, input: &mut R) -> usize {
    println!("cumatch: find PyTorch packages for your CUDA version");
    let mut shown = 0;
    let mut failures = 0;

    loop {
        println!("{MENU}");
        let choice = match read_answer(input, "Choice", &mut failures) {
            Answer::Line(choice) => choice,
            Answer::Retry => continue,
            Answer::Closed => break,
        };

        let outcome = match choice.to_lowercase().as_str() {
            "1" => match read_answer(input, "CUDA version (e.g. 11.8)", &mut failures) {
                Answer::Line(version) => ctx.matcher.match_version(&version, None),
                Answer::Retry => continue,
                Answer::Closed => break,
            },
            "2" => {
                let detection = ctx.detector.detect().await;
                if let Some(version) = &detection.version {
                    println!("Detected CUDA {version} via {}", detection.source);
                }
                ctx.matcher.match_detection(&detection)
            }
            "q" | "quit" | "exit" => break,
            "" => continue,
            other => {
                eprintln!("Unknown option '{other}'");
                continue;
            }
        };

        match outcome {
            Ok(result) => {
                shown += 1;
                println!("\n{}\n", render_summary(&result));
                match prompt_confirmation(input, "Copy pip command to clipboard?") {
                    Ok(true) => {
                        output::copy_pip_command(ctx, &result);
                    }
                    Ok(false) => {}
                    Err(err) => {
                        failures += 1;
                        eprintln!("Error: {err:#}");
                    }
                }
            }
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    println!("Bye.");
    shown
}
