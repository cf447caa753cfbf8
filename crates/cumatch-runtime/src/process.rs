//! Bounded external tool execution.
//!
//! Every tool cumatch runs goes through [`run_tool`], which enforces a
//! timeout and kills the child when it expires.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use cumatch_core::DetectionError;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// Captured output of a successful tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
}

impl ToolOutput {
    /// Stdout followed by stderr; some tools print versions to stderr.
    pub fn combined(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout.clone()
        } else {
            format!("{}{}", self.stdout, self.stderr)
        }
    }
}

/// Run `program` with `args`, waiting at most `limit`.
///
/// Missing programs, timeouts and non-zero exits are reported as the
/// matching [`DetectionError`] variant.
pub async fn run_tool(
    program: &str,
    args: &[&str],
    limit: Duration,
) -> Result<ToolOutput, DetectionError> {
    trace!(program, ?args, timeout_ms = limit.as_millis(), "Running tool");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match timeout(limit, cmd.output()).await {
        // Dropping the output future kills the child.
        Err(_) => {
            return Err(DetectionError::Timeout {
                program: program.to_string(),
                secs: limit.as_secs_f64(),
            });
        }
        Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DetectionError::NotFound(program.to_string()));
        }
        Ok(Err(e)) => {
            return Err(DetectionError::Io {
                program: program.to_string(),
                reason: e.to_string(),
            });
        }
        Ok(Ok(output)) => output,
    };

    if !output.status.success() {
        return Err(DetectionError::NonZeroExit {
            program: program.to_string(),
            code: output.status.code(),
        });
    }

    Ok(ToolOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program() {
        let err = run_tool(
            "cumatch-definitely-not-installed",
            &["--version"],
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();
        assert_eq!(
            err,
            DetectionError::NotFound("cumatch-definitely-not-installed".to_string())
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_slow_program() {
        let err = run_tool("sleep", &["5"], Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, DetectionError::Timeout { ref program, .. } if program == "sleep"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit() {
        let err = run_tool("sh", &["-c", "exit 3"], Duration::from_secs(2))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DetectionError::NonZeroExit {
                program: "sh".to_string(),
                code: Some(3),
            }
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_both_streams() {
        let out = run_tool("sh", &["-c", "echo out; echo err 1>&2"], Duration::from_secs(2))
            .await
            .unwrap();
        assert_eq!(out.stdout, "out\n");
        assert_eq!(out.stderr, "err\n");
        assert_eq!(out.combined(), "out\nerr\n");
    }

    #[test]
    fn test_combined_skips_empty_stderr() {
        let out = ToolOutput {
            stdout: "release 11.8".to_string(),
            stderr: "  \n".to_string(),
        };
        assert_eq!(out.combined(), "release 11.8");
    }
}
