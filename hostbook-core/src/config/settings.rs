//! Application settings stored in `settings.toml`.

use serde::{Deserialize, Serialize};

use crate::launcher::{DEFAULT_PROGRAM, Launcher};
use crate::tracing::TracingLevel;

/// Top-level application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Remote-login client settings
    pub client: ClientSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl AppSettings {
    /// Creates a launcher for the configured client
    #[must_use]
    pub fn launcher(&self) -> Launcher {
        Launcher::new(self.client.program.clone())
    }
}

/// Remote-login client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Executable name or path of the client
    pub program: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::Warn.to_string(),
        }
    }
}

impl LoggingSettings {
    /// Parses the configured level, falling back to `warn`
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.level.parse().unwrap_or_else(|()| {
            tracing::warn!(level = %self.level, "Unknown log level in settings, using warn");
            TracingLevel::Warn
        })
    }
}
