//! Add profile command.

use std::path::Path;

use hostbook_core::models::ProfileDraft;

use crate::error::CliError;
use crate::util::create_config_manager;

/// Parameters for the `add` command
pub struct AddParams {
    pub name: String,
    pub host: String,
    pub user: String,
    pub port: Option<String>,
    pub key: Option<String>,
    pub force: bool,
}

/// Add profile command handler
pub fn cmd_add(config_path: Option<&Path>, params: AddParams) -> Result<(), CliError> {
    let profile = ProfileDraft {
        name: params.name,
        hostname: params.host,
        username: params.user,
        port: params.port,
        key_path: params.key,
    }
    .build()?;

    let config_manager = create_config_manager(config_path)?;
    let mut store = config_manager.load_store()?;
    let launcher = config_manager.load_settings()?.launcher();

    let command_line = launcher.builder().command_line(&profile);
    let name = profile.name.clone();

    let replaced = if params.force {
        store.replace(profile)?.is_some()
    } else {
        store.add(profile)?;
        false
    };

    config_manager.save_store(&store)?;

    if replaced {
        println!("Replaced profile '{name}'");
    } else {
        println!("Added profile '{name}'");
    }
    println!("Command: {command_line}");

    Ok(())
}
