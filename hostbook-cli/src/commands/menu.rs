//! Interactive menu command.

use std::io;
use std::path::Path;

use crate::error::CliError;
use crate::interactive::Session;
use crate::interactive::prompt::Prompter;
use crate::util::create_config_manager;

/// Interactive menu command handler
///
/// A profile file that cannot be loaded ends the command before the menu
/// starts, so the file is never overwritten by a later save.
pub fn cmd_menu(config_path: Option<&Path>) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = config_manager.load_store()?;
    let launcher = config_manager.load_settings()?.launcher();

    tracing::info!(
        profiles = store.len(),
        dir = %config_manager.config_dir().display(),
        "Starting interactive menu"
    );

    let prompter = Prompter::new(io::stdin().lock(), io::stdout());
    Session::new(prompter, config_manager, store, launcher).run()
}
