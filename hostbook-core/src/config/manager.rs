//! Configuration directory and file access.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::AppSettings;
use crate::error::{ConfigError, ConfigResult};
use crate::store::ProfileStore;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "HOSTBOOK_CONFIG_DIR";

/// File name of the profile store
pub const PROFILES_FILE: &str = "profiles.json";

/// File name of the application settings
pub const SETTINGS_FILE: &str = "settings.toml";

/// Name of the application directory under the user config dir
const APP_DIR: &str = "hostbook";

/// Locates and reads/writes the configuration files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default configuration directory.
    ///
    /// `HOSTBOOK_CONFIG_DIR` takes precedence over the platform config
    /// directory (`~/.config/hostbook` on Linux).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if neither is available.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = std::env::var_os(CONFIG_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join(APP_DIR)))
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(config_dir))
    }

    /// Creates a manager for an explicit configuration directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        tracing::debug!(config_dir = %config_dir.display(), "Using configuration directory");
        Self { config_dir }
    }

    /// Returns the configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path of the profile file
    #[must_use]
    pub fn profiles_path(&self) -> PathBuf {
        self.config_dir.join(PROFILES_FILE)
    }

    /// Returns the path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads the profile store; a missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or corrupt.
    pub fn load_store(&self) -> ConfigResult<ProfileStore> {
        ProfileStore::load(&self.profiles_path())
    }

    /// Overwrites the profile file with `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_store(&self, store: &ProfileStore) -> ConfigResult<()> {
        store.save(&self.profiles_path())
    }

    /// Loads application settings; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or not valid TOML.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.settings_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppSettings::default()),
            Err(source) => return Err(ConfigError::Persistence { path, source }),
        };

        toml::from_str(&content).map_err(|e| ConfigError::Corrupt {
            path,
            reason: e.to_string(),
        })
    }

    /// Writes application settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        let content = toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize {
            what: "settings",
            reason: e.to_string(),
        })?;

        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Persistence {
            path: self.config_dir.clone(),
            source,
        })?;

        let path = self.settings_path();
        fs::write(&path, content).map_err(|source| ConfigError::Persistence { path, source })
    }
}
