//! `cumatch gpu`.

use anyhow::Result;

use cumatch_runtime::gpu_status;

use crate::bootstrap::CliContext;

/// Print one line per NVIDIA GPU.
///
/// # Errors
///
/// Fails when `nvidia-smi` is missing, times out or exits with an error.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let gpus = gpu_status(ctx.settings.detect_timeout()).await?;

    if gpus.is_empty() {
        println!("nvidia-smi reported no GPUs.");
        return Ok(());
    }

    for gpu in &gpus {
        println!("{gpu}");
    }
    Ok(())
}
