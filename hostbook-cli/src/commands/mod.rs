//! Command handler modules for the CLI.

mod add;
mod completions;
mod connect;
mod delete;
mod edit;
mod list;
mod menu;
mod show;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List { format } => list::cmd_list(config_path, format),
        Commands::Show { name } => show::cmd_show(config_path, &name),
        Commands::Add {
            name,
            host,
            user,
            port,
            key,
            force,
        } => add::cmd_add(
            config_path,
            add::AddParams {
                name,
                host,
                user,
                port,
                key,
                force,
            },
        ),
        Commands::Edit {
            name,
            host,
            user,
            port,
            key,
            no_key,
        } => edit::cmd_edit(
            config_path,
            &name,
            edit::EditParams {
                host,
                user,
                port,
                key,
                no_key,
            },
        ),
        Commands::Delete { name, yes } => delete::cmd_delete(config_path, &name, yes),
        Commands::Connect { name, dry_run } => connect::cmd_connect(config_path, &name, dry_run),
        Commands::Menu => menu::cmd_menu(config_path),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
