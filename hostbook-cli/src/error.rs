//! CLI error types and exit codes.

use hostbook_core::error::{ConfigError, HostbookError, LaunchError, StoreError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, or other non-connection errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Profile missing or the remote-login client could not be started
    pub const CONNECTION_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration file could not be read or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid input or store contract violation
    #[error("{0}")]
    Store(StoreError),

    /// Profile not found
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// More than one profile matches a partial name
    #[error("Ambiguous profile name '{name}'. Matches: {matches}")]
    Ambiguous {
        /// Name as given
        name: String,
        /// Comma-separated candidates
        matches: String,
    },

    /// The remote-login client could not be started
    #[error("{0}")]
    Launch(#[from] LaunchError),

    /// The remote session ended with a non-zero exit code
    #[error("Remote session exited with code {0}")]
    SessionExit(i32),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => Self::ProfileNotFound(name),
            other => Self::Store(other),
        }
    }
}

impl From<HostbookError> for CliError {
    fn from(err: HostbookError) -> Self {
        match err {
            HostbookError::Store(e) => e.into(),
            HostbookError::Config(e) => Self::Config(e),
            HostbookError::Launch(e) => Self::Launch(e),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, validation, duplicate, IO)
    /// - 2: Connection failure (profile not found, client failed to start)
    /// - N: Exit code of the remote session
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ProfileNotFound(_) | Self::Launch(_) => exit_codes::CONNECTION_FAILURE,
            Self::SessionExit(code) if *code > 0 => *code,
            Self::SessionExit(_) => exit_codes::GENERAL_ERROR,
            Self::Config(_)
            | Self::Store(_)
            | Self::Ambiguous { .. }
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
