//! Error types for `Hostbook`
//!
//! Each concern has its own error enum so callers can react to the failure
//! kind (re-prompt on validation, abort on persistence) while
//! [`HostbookError`] unifies them for code that only needs to report.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for `Hostbook` operations
#[derive(Debug, Error)]
pub enum HostbookError {
    /// Profile store contract violation or invalid input
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration file could not be read or written
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The remote-login client could not be started
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// Errors raised by in-memory profile store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// User input failed a field rule
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Field that failed validation
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },

    /// A profile with this name already exists
    #[error("A profile named '{0}' already exists")]
    DuplicateName(String),

    /// No profile with this name exists
    #[error("Profile not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Creates a validation error for the given field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by bad user input
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Errors raised while loading or saving configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but does not have the expected structure
    #[error("Configuration file {path} is corrupt: {reason}")]
    Corrupt {
        /// File that failed to parse
        path: PathBuf,
        /// Parser or validation message
        reason: String,
    },

    /// Reading or writing the file failed
    #[error("Failed to access {path}: {source}")]
    Persistence {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serializing in-memory data failed
    #[error("Failed to serialize {what}: {reason}")]
    Serialize {
        /// What was being serialized
        what: &'static str,
        /// Serializer message
        reason: String,
    },

    /// No configuration directory could be determined
    #[error("Unable to locate a configuration directory")]
    NoConfigDir,
}

/// Error raised when the remote-login client cannot be spawned
#[derive(Debug, Error)]
#[error("Failed to start '{program}': {source}")]
pub struct LaunchError {
    /// Executable that failed to start
    pub program: String,
    /// Underlying spawn error
    #[source]
    pub source: std::io::Error,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for launch operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Result type for `Hostbook` operations
pub type HostbookResult<T> = Result<T, HostbookError>;
