//! Show profile details command.

use std::path::Path;

use crate::error::CliError;
use crate::format::format_details;
use crate::util::{create_config_manager, find_profile};

/// Show profile details command handler
pub fn cmd_show(config_path: Option<&Path>, name: &str) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = config_manager.load_store()?;
    let launcher = config_manager.load_settings()?.launcher();

    let profile = find_profile(&store, name)?;
    println!("{}", format_details(profile, launcher.builder()));

    Ok(())
}
