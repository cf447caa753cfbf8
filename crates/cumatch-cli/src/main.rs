//! CLI entry point: the composition root.
//!
//! Loads `.env`, parses arguments, initializes logging and dispatches to
//! the handlers. Errors are printed once here and mapped to exit codes.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cumatch_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    // Logs go to stderr so stdout stays clean for commands and JSON
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(CliConfig::new(cli.settings()))?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => handlers::interactive::execute(&ctx).await?,
        Commands::Match { version, output } => {
            handlers::match_version::execute(&ctx, &version, &output).await?;
        }
        Commands::Auto { output } => handlers::auto::execute(&ctx, &output).await?,
        Commands::Detect { json } => handlers::detect::execute(&ctx, json).await?,
        Commands::Table { json } => handlers::table::execute(&ctx, json)?,
        Commands::Gpu => handlers::gpu::execute(&ctx).await?,
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before parsing so it can feed the CUMATCH_* options
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(exit_code_for(&err)).unwrap_or(1))
        }
    }
}
