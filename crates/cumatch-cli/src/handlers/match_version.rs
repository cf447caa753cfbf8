//! `cumatch match <VERSION>`.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::OutputArgs;

use super::output;

/// Resolve a manually entered CUDA version and print the result.
///
/// # Errors
///
/// Fails with a `MatchError` when the version is malformed or has no
/// compatible table entry.
pub async fn execute(ctx: &CliContext, version: &str, args: &OutputArgs) -> Result<()> {
    let result = ctx
        .matcher_with_extras(&args.extras)
        .match_version(version, None)?;
    output::emit(ctx, result, args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code_for;
    use crate::handlers::test_support::{MemoryClipboard, context};
    use cumatch_core::DetectionResult;
    use std::sync::Arc;

    fn ctx() -> CliContext {
        context(
            DetectionResult::not_detected(Vec::new()),
            Arc::new(MemoryClipboard::default()),
        )
    }

    #[tokio::test]
    async fn test_invalid_version_exit_code() {
        let err = execute(&ctx(), "eleven", &OutputArgs::default())
            .await
            .unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }

    #[tokio::test]
    async fn test_unknown_major_exit_code() {
        let err = execute(&ctx(), "9.2", &OutputArgs::default())
            .await
            .unwrap_err();
        assert_eq!(exit_code_for(&err), 3);
    }

    #[tokio::test]
    async fn test_fallback_succeeds() {
        let args = OutputArgs {
            json: true,
            ..OutputArgs::default()
        };
        assert!(execute(&ctx(), "11.7", &args).await.is_ok());
    }
}
