//! List profiles command.

use std::path::Path;

use hostbook_core::error::ConfigError;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{ProfileOutput, format_detail_list, format_table};
use crate::util::create_config_manager;

/// List profiles command handler
pub fn cmd_list(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let store = config_manager.load_store()?;
    let settings = config_manager.load_settings()?;
    let launcher = settings.launcher();

    let profiles: Vec<_> = store.list().collect();

    let output = match format {
        OutputFormat::Table => format_table(&profiles),
        OutputFormat::Details => format_detail_list(&profiles, launcher.builder()),
        OutputFormat::Json => {
            let items: Vec<_> = profiles
                .iter()
                .map(|p| ProfileOutput::new(p, launcher.builder()))
                .collect();
            serde_json::to_string_pretty(&items).map_err(|e| ConfigError::Serialize {
                what: "profile list",
                reason: e.to_string(),
            })?
        }
    };

    println!("{output}");
    Ok(())
}
