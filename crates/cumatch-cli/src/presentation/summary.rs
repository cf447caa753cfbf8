//! Match summary text.

use cumatch_core::{MatchKind, ResolutionResult};

use super::tables::format_optional;

/// Render the human-readable summary of a match.
///
/// Lists the requested version and its provenance, a note when a different
/// table key was used, the package versions and both install commands.
pub fn render_summary(result: &ResolutionResult) -> String {
    let mut lines = vec![format!(
        "CUDA version: {} (source: {})",
        result.requested,
        result.source_label()
    )];

    match result.match_kind {
        MatchKind::Exact => {}
        MatchKind::NearestMinor => lines.push(format!(
            "Note: no exact mapping for CUDA {}, using closest version {}",
            result.requested, result.matched_key
        )),
        MatchKind::NewestInMajor => lines.push(format!(
            "Note: no exact mapping for CUDA {}, using newest version in the same major {}",
            result.requested, result.matched_key
        )),
    }

    lines.extend(
        result
            .entry
            .packages()
            .into_iter()
            .map(|(name, version)| format!("{name:<12} {}", format_optional(version, "--"))),
    );
    lines.push(format!(
        "{:<12} {}",
        "index tag",
        format_optional(result.entry.index_tag(), "none (CPU)")
    ));

    if let Some(gpu) = &result.gpu_info {
        lines.push(String::new());
        lines.push("GPU status:".to_string());
        lines.extend(gpu.lines().map(|line| format!("  {line}")));
    }

    lines.push(String::new());
    lines.push("pip:".to_string());
    lines.push(format!("  {}", result.pip_command));
    lines.push(String::new());
    lines.push("conda:".to_string());
    lines.push(format!("  {}", result.conda_command));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumatch_core::{DetectionSource, VersionEntry};

    fn result(kind: MatchKind) -> ResolutionResult {
        ResolutionResult {
            requested: "11.7".to_string(),
            source: Some(DetectionSource::CompilerTool),
            matched_key: "11.8".to_string(),
            match_kind: kind,
            entry: VersionEntry::new("2.2.0", "0.15.2", "2.2.2").with_tag("cu118"),
            pip_command: "pip install torch==2.2.0".to_string(),
            conda_command: "conda install pytorch==2.2.0 -c pytorch".to_string(),
            gpu_info: None,
        }
    }

    #[test]
    fn test_fallback_note() {
        let text = render_summary(&result(MatchKind::NearestMinor));
        assert!(text.starts_with("CUDA version: 11.7 (source: nvcc)\n"));
        assert!(text.contains("using closest version 11.8"));
        assert!(text.contains("torchvision  0.15.2"));
        assert!(text.contains("index tag    cu118"));
        assert!(text.ends_with("conda:\n  conda install pytorch==2.2.0 -c pytorch"));
    }

    #[test]
    fn test_exact_has_no_note() {
        let text = render_summary(&result(MatchKind::Exact));
        assert!(!text.contains("Note:"));
        assert!(!text.contains("GPU status"));
    }

    #[test]
    fn test_missing_values_and_gpu() {
        let mut r = result(MatchKind::NewestInMajor).with_gpu_info("GPU0: A100\nGPU1: A100");
        r.entry.torchaudio = None;
        r.entry.pip_tag = None;
        let text = render_summary(&r);
        assert!(text.contains("newest version in the same major 11.8"));
        assert!(text.contains("torchaudio   --"));
        assert!(text.contains("index tag    none (CPU)"));
        assert!(text.contains("GPU status:\n  GPU0: A100\n  GPU1: A100\n"));
    }

    #[test]
    fn test_exact_layout() {
        let text = render_summary(&result(MatchKind::Exact));
        let expected = "CUDA version: 11.7 (source: nvcc)\n\
                        torch        2.2.0\n\
                        torchvision  0.15.2\n\
                        torchaudio   2.2.2\n\
                        index tag    cu118\n\
                        \n\
                        pip:\n  pip install torch==2.2.0\n\
                        \n\
                        conda:\n  conda install pytorch==2.2.0 -c pytorch";
        assert_eq!(text, expected);
    }
}
