//! Delete profile command.

use std::io;
use std::path::Path;

use crate::error::CliError;
use crate::interactive::prompt::{Prompt, Prompter};
use crate::util::create_config_manager;

/// Delete profile command handler
pub fn cmd_delete(config_path: Option<&Path>, name: &str, yes: bool) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let mut store = config_manager.load_store()?;

    let name = store.require(name)?.name.clone();

    if !yes {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        let question = format!("Delete profile '{name}'?");
        if prompter.confirm(&question, false)? != Prompt::Value(true) {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.delete(&name)?;
    config_manager.save_store(&store)?;

    println!("Deleted profile '{name}'");

    Ok(())
}
