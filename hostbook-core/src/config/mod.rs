//! Configuration management for `Hostbook`
//!
//! This module provides the `ConfigManager` for locating the configuration
//! directory and loading/saving the profile store (JSON) and application
//! settings (TOML).

mod manager;
pub mod settings;

pub use manager::{CONFIG_DIR_ENV, ConfigManager, PROFILES_FILE, SETTINGS_FILE};
pub use settings::{AppSettings, ClientSettings, LoggingSettings};
