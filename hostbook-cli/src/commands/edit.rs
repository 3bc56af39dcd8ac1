//! Edit profile command.

use std::path::Path;

use hostbook_core::models::{KeyPathUpdate, ProfileUpdate};

use crate::error::CliError;
use crate::util::create_config_manager;

/// Parameters for the `edit` command
pub struct EditParams {
    pub host: Option<String>,
    pub user: Option<String>,
    pub port: Option<String>,
    pub key: Option<String>,
    pub no_key: bool,
}

impl EditParams {
    fn into_update(self) -> ProfileUpdate {
        let key_path = match (self.key, self.no_key) {
            (Some(key), _) => KeyPathUpdate::Set(key),
            (None, true) => KeyPathUpdate::Clear,
            (None, false) => KeyPathUpdate::Keep,
        };
        ProfileUpdate {
            hostname: self.host,
            username: self.user,
            port: self.port,
            key_path,
        }
    }
}

/// Edit profile command handler
pub fn cmd_edit(
    config_path: Option<&Path>,
    name: &str,
    params: EditParams,
) -> Result<(), CliError> {
    let update = params.into_update();

    let config_manager = create_config_manager(config_path)?;
    let mut store = config_manager.load_store()?;
    let launcher = config_manager.load_settings()?.launcher();

    let name = store.require(name)?.name.clone();

    if update.is_empty() {
        println!("No changes for profile '{name}'");
        return Ok(());
    }

    let command_line = launcher.builder().command_line(store.edit(&name, &update)?);
    config_manager.save_store(&store)?;

    println!("Updated profile '{name}'");
    println!("Command: {command_line}");

    Ok(())
}
