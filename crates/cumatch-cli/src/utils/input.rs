//! User input utilities for interactive command-line prompts.
//!
//! Prompts read from any `BufRead` so the interactive loop can be driven
//! by tests; the binary passes a locked stdin.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prompts the user for a line of input.
///
/// Returns the trimmed line, or `None` when the input is closed. Bytes that
/// are not valid UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if reading from the input fails.
pub fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read user input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input and closed input are treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from the input fails.
pub fn prompt_confirmation<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool> {
    loop {
        let Some(answer) = prompt_line(input, &format!("{prompt} (y/N)"))? else {
            return Ok(false);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_trims() {
        let mut input = Cursor::new("  11.8 \n");
        assert_eq!(
            prompt_line(&mut input, "CUDA").unwrap(),
            Some("11.8".to_string())
        );
        assert_eq!(prompt_line(&mut input, "CUDA").unwrap(), None);
    }

    #[test]
    fn test_prompt_line_invalid_utf8() {
        let mut input = Cursor::new(b"\xff\xfe\n11.8\n".to_vec());
        let garbled = prompt_line(&mut input, "CUDA").unwrap().unwrap();
        assert!(garbled.contains('\u{fffd}'));
        assert_eq!(
            prompt_line(&mut input, "CUDA").unwrap(),
            Some("11.8".to_string())
        );
    }

    #[test]
    fn test_confirmation_answers() {
        let mut input = Cursor::new("maybe\nYES\n\nno\n");
        assert!(prompt_confirmation(&mut input, "Copy?").unwrap());
        assert!(!prompt_confirmation(&mut input, "Copy?").unwrap());
        assert!(!prompt_confirmation(&mut input, "Copy?").unwrap());
        assert!(!prompt_confirmation(&mut input, "Copy?").unwrap());
    }
}
