//! blogsmith CLI
//!
//! Usage:
//!   blogsmith web --open
//!   blogsmith generate --topic "LLMs for DDoS Detection" -o blog.md
//!   blogsmith roles
//!   blogsmith check --test-llm

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogsmith::cli::{Cli, Commands};
use blogsmith::config::FileConfig;
use blogsmith::handlers::{self, CommandContext};

/// Initialize tracing with the given verbosity level
///
/// - 0: warn (default)
/// - 1: info (-v)
/// - 2: debug (-vv)
/// - 3+: trace (-vvv)
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Allow RUST_LOG to override if set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    let file_config = match &cli.config {
        Some(path) => FileConfig::load_from_path(path)?,
        None => FileConfig::load()?,
    };

    let ctx = CommandContext::new(cli.endpoint, cli.model, file_config);

    let code = match cli.command {
        #[cfg(feature = "web")]
        Commands::Web { host, port, open } => {
            handlers::run_web(&ctx, host, port, open).await?;
            ExitCode::SUCCESS
        }
        #[cfg(not(feature = "web"))]
        Commands::Web { .. } => {
            anyhow::bail!("blogsmith was built without the `web` feature");
        }
        Commands::Generate { topic, output } => handlers::run_generate(&ctx, topic, output).await?,
        Commands::Roles => {
            handlers::run_roles(&ctx)?;
            ExitCode::SUCCESS
        }
        Commands::Check { test_llm } => {
            handlers::run_check(&ctx, test_llm).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
