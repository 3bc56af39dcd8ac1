//! `Hostbook` - address book of SSH connection profiles
//!
//! Provides commands for listing, adding, editing, deleting and connecting
//! to saved profiles, plus an interactive menu that is started when no
//! command is given.

mod cli;
mod commands;
mod error;
mod format;
mod interactive;
mod util;

use clap::Parser;
use cli::{Cli, Commands};
use hostbook_core::tracing::{TracingConfig, TracingLevel, init_tracing};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(e) = run(cli) {
        if !quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    let settings = util::create_config_manager(config_path)?.load_settings()?;

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose)
            .unwrap_or_else(|| settings.logging.tracing_level())
    };
    let tracing_config = TracingConfig::new().with_level(level).with_env_filter();
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: logging disabled: {e}");
    }

    tracing::debug!(?config_path, %level, "Starting hostbook");

    commands::dispatch(config_path, cli.command.unwrap_or(Commands::Menu))
}
