//! Output shared by the `match`, `auto` and interactive flows.

use anyhow::Result;
use tracing::warn;

use cumatch_core::{MatchError, ResolutionResult};
use cumatch_runtime::gpu_status_text;

use crate::bootstrap::CliContext;
use crate::commands::OutputArgs;
use crate::presentation::render_summary;

/// Print `result` as text or JSON and copy the pip command if asked.
pub(crate) async fn emit(
    ctx: &CliContext,
    result: ResolutionResult,
    args: &OutputArgs,
) -> Result<()> {
    let result = if args.gpu_info {
        attach_gpu_info(ctx, result).await
    } else {
        result
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_summary(&result));
    }

    if args.copy {
        copy_pip_command(ctx, &result);
    }
    Ok(())
}

pub(crate) async fn attach_gpu_info(ctx: &CliContext, result: ResolutionResult) -> ResolutionResult {
    let text = gpu_status_text(ctx.settings.detect_timeout())
        .await
        .unwrap_or_else(|| "GPU info unavailable".to_string());
    result.with_gpu_info(text)
}

/// Copy the pip command. Failure is reported and never fatal.
pub(crate) fn copy_pip_command(ctx: &CliContext, result: &ResolutionResult) -> bool {
    match ctx.clipboard.copy(&result.pip_command) {
        Ok(tool) => {
            eprintln!("Copied pip command to clipboard ({tool})");
            true
        }
        Err(e) => {
            let err = MatchError::ClipboardUnavailable(e.to_string());
            warn!(error = %e, "Clipboard copy failed");
            eprintln!("{err}");
            false
        }
    }
}
