//! `cumatch auto`: detect, then match.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::OutputArgs;

use super::output;

/// Detect the local CUDA version and print the matching packages.
///
/// # Errors
///
/// Fails with `MatchError::DetectionFailed` when no strategy found a
/// version, or with the usual match errors for the detected version.
pub async fn execute(ctx: &CliContext, args: &OutputArgs) -> Result<()> {
    let detection = ctx.detector.detect().await;
    if let Some(version) = &detection.version {
        eprintln!("Detected CUDA {version} via {}", detection.source);
    }

    let result = ctx
        .matcher_with_extras(&args.extras)
        .match_detection(&detection)?;
    output::emit(ctx, result, args).await
}
