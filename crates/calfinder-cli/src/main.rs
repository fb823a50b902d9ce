//! calfinder CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use calfinder_cli::cli::{Cli, Command};
use calfinder_cli::commands;
use calfinder_cli::config::{ClientConfig, pick};
use calfinder_cli::error::{CliError, CliResult};
use calfinder_core::DirectoryResolver;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    }
    .map_err(CliError::Config)?
    .merge_cli(&cli);

    let resolver_config = config.to_resolver_config().map_err(CliError::Config)?;
    let resolver = DirectoryResolver::new(resolver_config)?;

    let format = cli.output_format();
    let mut stdout = std::io::stdout().lock();
    let account = &config.account;

    match cli.command {
        Command::Auth => commands::auth::run(&resolver, format, &mut stdout).await,
        Command::Calendars { ref user_id } => {
            let user_id = pick(user_id.as_deref(), account.user_id.as_deref(), "user_id")
                .map_err(CliError::Config)?;
            commands::calendars::run(&resolver, user_id, format, &mut stdout).await
        }
        Command::Events {
            ref user_id,
            ref calendar_id,
        } => {
            let user_id = pick(user_id.as_deref(), account.user_id.as_deref(), "user_id")
                .map_err(CliError::Config)?;
            let calendar_id = pick(
                calendar_id.as_deref(),
                account.calendar_id.as_deref(),
                "calendar_id",
            )
            .map_err(CliError::Config)?;
            commands::events::run(&resolver, user_id, calendar_id, format, &mut stdout).await
        }
    }
}
