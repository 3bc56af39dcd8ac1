//! Connect command: open a session to a profile's host.

use std::path::Path;

use crate::error::CliError;
use crate::util::{create_config_manager, find_profile};

/// Connect command handler
pub fn cmd_connect(config_path: Option<&Path>, name: &str, dry_run: bool) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = config_manager.load_store()?;
    let launcher = config_manager.load_settings()?.launcher();

    let profile = find_profile(&store, name)?;

    if dry_run {
        println!("{}", launcher.builder().command_line(profile));
        return Ok(());
    }

    println!("Connecting to '{}' ({})...", profile.name, profile.destination());

    match launcher.launch(profile)? {
        0 => Ok(()),
        code => Err(CliError::SessionExit(code)),
    }
}
