//! Field rules shared by new profiles and edits.

use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Trims `value` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns a validation error naming `field` if the value is blank.
pub fn require_non_empty(field: &'static str, value: &str) -> StoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parses user-entered port text.
///
/// # Errors
///
/// Returns a validation error unless the text is an integer in 1..=65535.
pub fn parse_port(text: &str) -> StoreResult<u16> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| StoreError::validation("port", format!("'{trimmed}' is not a number")))?;

    u16::try_from(value)
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| StoreError::validation("port", "must be between 1 and 65535"))
}

/// Expands `~` and environment variables in a key path.
///
/// Unknown variables are left as written.
#[must_use]
pub fn expand_key_path(path: &str) -> String {
    let trimmed = path.trim();
    shellexpand::full(trimmed).map_or_else(
        |_| shellexpand::tilde(trimmed).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

/// Expands a key path and checks that it names an existing file.
///
/// This is the only place key existence is checked; stored paths are not
/// re-validated when loading or connecting.
///
/// # Errors
///
/// Returns a validation error if the path is blank or no file exists there.
pub fn resolve_key_path(path: &str) -> StoreResult<String> {
    let raw = require_non_empty("key path", path)?;
    let expanded = expand_key_path(&raw);

    if !Path::new(&expanded).is_file() {
        return Err(StoreError::validation(
            "key path",
            format!("no such file: {expanded}"),
        ));
    }

    tracing::debug!(key_path = %expanded, "Resolved private key path");
    Ok(expanded)
}
