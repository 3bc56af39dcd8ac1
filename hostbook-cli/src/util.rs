//! Shared utility functions used across command modules.

use std::path::Path;

use hostbook_core::config::ConfigManager;
use hostbook_core::models::ConnectionProfile;
use hostbook_core::store::ProfileStore;

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => Ok(ConfigManager::new()?),
    }
}

/// Find a profile by name for read-only commands
///
/// Exact matches win, then a case-insensitive match, then a unique prefix.
/// Commands that change the store look names up exactly instead.
pub fn find_profile<'a>(
    store: &'a ProfileStore,
    name: &str,
) -> Result<&'a ConnectionProfile, CliError> {
    if let Some(profile) = store.get(name) {
        return Ok(profile);
    }

    if let Some(profile) = store.list().find(|p| p.name.eq_ignore_ascii_case(name)) {
        return Ok(profile);
    }

    let lower = name.to_lowercase();
    let matches: Vec<_> = store
        .list()
        .filter(|p| p.name.to_lowercase().starts_with(&lower))
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::ProfileNotFound(name.to_string())),
        [profile] => Ok(*profile),
        _ => Err(CliError::Ambiguous {
            name: name.to_string(),
            matches: matches
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
