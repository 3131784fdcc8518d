// Hogo - PII detection and redaction for Japanese documents
// Copyright (c) 2025 Hogo Contributors
// Licensed under the MIT License

use clap::Parser;
use hogo::cli::commands::resolve_config;
use hogo::cli::{Cli, Commands};
use hogo::config::HogoConfig;
use hogo::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // init and validate-config report configuration problems themselves
    let config = resolve_config(&cli.config);

    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Hogo starting");

    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    config: hogo::domain::Result<HogoConfig>,
) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => return args.execute(&cli.config).await,
        Commands::Init(args) => return args.execute().await,
        _ => {}
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            hogo::log_error_with_context!(&e, "Failed to load configuration");
            eprintln!("❌ {e}");
            return Ok(2);
        }
    };

    match &cli.command {
        Commands::Detect(args) => args.execute(&config).await,
        Commands::Redact(args) => args.execute(&config).await,
        Commands::Segments(args) => args.execute(&config).await,
        Commands::ValidateConfig(_) | Commands::Init(_) => Ok(0),
    }
}
