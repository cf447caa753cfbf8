//! End-to-end checks of the CLI composition root against table files.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use cumatch_cli::{Cli, CliConfig, CliError, Commands, bootstrap};
use cumatch_core::{MatchKind, TableOrigin, VersionsFileSource};

fn write_table(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("versions.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_explicit_table_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(
        &dir,
        r#"{
            "11.8": {
                "torch": "2.2.0",
                "torchvision": "0.15.2",
                "torchaudio": "2.2.2",
                "pip_tag": "cu118"
            }
        }"#,
    );

    let cli = Cli::parse_from([
        "cumatch",
        "--versions-file",
        path.to_str().unwrap(),
        "match",
        "11.7",
    ]);
    let ctx = bootstrap(CliConfig::new(cli.settings())).unwrap();
    assert_eq!(ctx.table_file.source, VersionsFileSource::Explicit);
    assert_eq!(ctx.matcher.table().origin(), &TableOrigin::File(path));

    let Some(Commands::Match { version, .. }) = cli.command else {
        panic!("expected match command");
    };
    let result = ctx.matcher.match_version(&version, None).unwrap();
    assert_eq!(result.matched_key, "11.8");
    assert_eq!(result.match_kind, MatchKind::NearestMinor);
    assert_eq!(
        result.pip_command,
        "pip install torch==2.2.0 torchvision==0.15.2 torchaudio==2.2.2 \
         --extra-index-url https://download.pytorch.org/whl/cu118"
    );
}

#[test]
fn test_malformed_table_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir, r#"{"eleven": {"torch": "2.0.1"}}"#);

    let cli = Cli::parse_from(["cumatch", "--versions-file", path.to_str().unwrap(), "table"]);
    let err = bootstrap(CliConfig::new(cli.settings())).err().unwrap();
    assert!(matches!(err, CliError::Table(_)));
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_index_url_flag_reaches_commands() {
    let cli = Cli::parse_from([
        "cumatch",
        "--versions-file",
        "/nonexistent/cumatch/versions.json",
        "--index-url",
        "https://mirror.example.com/whl/",
        "match",
        "12.4",
    ]);
    let ctx = bootstrap(CliConfig::new(cli.settings())).unwrap();
    let result = ctx.matcher.match_version("12.4", None).unwrap();
    assert!(
        result
            .pip_command
            .ends_with("--extra-index-url https://mirror.example.com/whl/cu121")
    );
}

#[test]
fn test_bad_timeout_is_config_error() {
    let cli = Cli::parse_from(["cumatch", "--timeout", "0", "detect"]);
    let err = bootstrap(CliConfig::new(cli.settings())).err().unwrap();
    assert_eq!(err.exit_code(), 78);
}
