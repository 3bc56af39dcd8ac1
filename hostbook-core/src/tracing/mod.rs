//! Tracing integration for structured logging
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer so they never
//! mix with command output or with the terminal session of the remote-login
//! client. The level comes from `-v` flags or the settings file, and a full
//! directive in `HOSTBOOK_LOG` replaces both.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a full filter directive (e.g. `hostbook_core=trace`)
pub const LOG_ENV: &str = "HOSTBOOK_LOG";

/// Crate targets the level applies to
const LOG_TARGETS: [&str; 2] = ["hostbook_core", "hostbook"];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive as given
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Mutations and launches
    Info,
    /// Load, save and command building
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Maps a `-v` count to a level, or `None` for no flag
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::Info),
            2 => Some(Self::Debug),
            _ => Some(Self::Trace),
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Level applied to the hostbook crates
    pub level: TracingLevel,
    /// Full filter directive; replaces `level` when set
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a configuration at the default level
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Uses the `HOSTBOOK_LOG` directive as filter if it is set
    #[must_use]
    pub fn with_env_filter(self) -> Self {
        match std::env::var(LOG_ENV) {
            Ok(filter) if !filter.trim().is_empty() => self.with_filter(filter),
            _ => self,
        }
    }

    /// Returns the filter directive this configuration produces
    #[must_use]
    pub fn directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            LOG_TARGETS
                .iter()
                .map(|target| format!("{target}={}", self.level))
                .collect::<Vec<_>>()
                .join(",")
        })
    }

    fn env_filter(&self) -> TracingResult<EnvFilter> {
        let directive = self.directive();
        EnvFilter::try_new(&directive).map_err(|e| TracingError::InvalidFilter {
            directive,
            reason: e.to_string(),
        })
    }
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    let filter = config.env_filter()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(level = %config.level, "Tracing initialized");

    Ok(())
}
