//! `Hostbook` Core Library
//!
//! This crate provides the core of the `Hostbook` SSH address book: the
//! profile store, its on-disk format, and the mapping from a profile to a
//! remote-login client invocation.
//!
//! # Crate Structure
//!
//! - [`models`] - Connection profiles, drafts, updates and field rules
//! - [`store`] - The name-keyed profile store and its JSON persistence
//! - [`launcher`] - Command building and child-process execution
//! - [`config`] - Configuration directory, settings file
//! - [`error`] - Error taxonomy
//! - [`tracing`] - Logging setup

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod launcher;
pub mod models;
pub mod store;
pub mod tracing;

pub use config::{AppSettings, ConfigManager};
pub use error::{
    ConfigError, ConfigResult, HostbookError, HostbookResult, LaunchError, LaunchResult,
    StoreError, StoreResult,
};
pub use launcher::{CommandBuilder, Launcher, SshCommand, build_command};
pub use models::{ConnectionProfile, KeyPathUpdate, ProfileDraft, ProfileUpdate};
pub use store::ProfileStore;
