//! `cumatch detect`.

use anyhow::Result;

use cumatch_core::MatchError;

use crate::bootstrap::CliContext;
use crate::presentation::print_detection;

/// Run detection and print every strategy's outcome.
///
/// # Errors
///
/// Fails with `MatchError::DetectionFailed` after printing when nothing was
/// detected.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let detection = ctx.detector.detect().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&detection)?);
    } else {
        print_detection(&detection);
    }

    if !detection.is_detected() {
        let reason = detection
            .error
            .unwrap_or_else(|| "Unable to detect CUDA version".to_string());
        return Err(MatchError::DetectionFailed(reason).into());
    }
    Ok(())
}
