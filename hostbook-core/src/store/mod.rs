//! Profile store
//!
//! [`ProfileStore`] is the in-memory address book. It is loaded once from
//! the profile file, mutated by the presentation layer, and written back
//! after every change with [`ProfileStore::save`]. There is no shared
//! instance: callers own the store and pass it where it is needed.

mod file;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigResult, StoreError, StoreResult};
use crate::models::validation::require_non_empty;
use crate::models::{ConnectionProfile, ProfileUpdate};

/// Name-keyed collection of connection profiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: BTreeMap<String, ConnectionProfile>,
}

impl ProfileStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from `path`.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Corrupt` if the file is not a valid profile
    /// object and `ConfigError::Persistence` if it cannot be read.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let profiles = file::read_profiles(path)?;
        tracing::debug!(
            path = %path.display(),
            count = profiles.len(),
            "Loaded profile store"
        );
        Ok(Self {
            profiles: profiles.into_iter().map(|p| (p.name.clone(), p)).collect(),
        })
    }

    /// Overwrites `path` with the whole store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Persistence` on I/O failure.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        file::write_profiles(path, self.profiles.values())?;
        tracing::debug!(
            path = %path.display(),
            count = self.profiles.len(),
            "Saved profile store"
        );
        Ok(())
    }

    /// Inserts a new profile.
    ///
    /// Text fields are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateName` if the name is taken, or a
    /// validation error. The store is unchanged on error.
    pub fn add(&mut self, profile: ConnectionProfile) -> StoreResult<()> {
        let profile = normalize(profile)?;
        if self.profiles.contains_key(&profile.name) {
            return Err(StoreError::DuplicateName(profile.name));
        }
        tracing::info!(name = %profile.name, "Added profile");
        self.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Inserts a profile, overwriting any profile with the same name.
    ///
    /// Returns the replaced profile, if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error; the store is unchanged on error.
    pub fn replace(&mut self, profile: ConnectionProfile) -> StoreResult<Option<ConnectionProfile>> {
        let profile = normalize(profile)?;
        let previous = self.profiles.insert(profile.name.clone(), profile);
        if let Some(ref old) = previous {
            tracing::info!(name = %old.name, "Replaced profile");
        }
        Ok(previous)
    }

    /// Applies field-level overrides to the named profile.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the name is absent, or a
    /// validation error. The store is unchanged on error.
    pub fn edit(&mut self, name: &str, update: &ProfileUpdate) -> StoreResult<&ConnectionProfile> {
        let current = self
            .profiles
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        let updated = update.apply(current)?;
        *current = updated;
        tracing::info!(name = %name, "Edited profile");
        Ok(current)
    }

    /// Removes the named profile and returns it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the name is absent.
    pub fn delete(&mut self, name: &str) -> StoreResult<ConnectionProfile> {
        let removed = self
            .profiles
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        tracing::info!(name = %name, "Deleted profile");
        Ok(removed)
    }

    /// Returns the named profile
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConnectionProfile> {
        self.profiles.get(name)
    }

    /// Returns the named profile or `StoreError::NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the name is absent.
    pub fn require(&self, name: &str) -> StoreResult<&ConnectionProfile> {
        self.get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Returns true if a profile with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Iterates over profiles sorted by name.
    ///
    /// The iterator borrows the store, so it cannot observe mutations and
    /// can be cloned to walk the same sequence again.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &ConnectionProfile> + Clone + '_ {
        self.profiles.values()
    }

    /// Iterates over profile names in sorted order
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of stored profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if the store holds no profiles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Trims the text fields and checks the structural rules
fn normalize(mut profile: ConnectionProfile) -> StoreResult<ConnectionProfile> {
    profile.name = require_non_empty("name", &profile.name)?;
    profile.hostname = require_non_empty("hostname", &profile.hostname)?;
    profile.username = require_non_empty("username", &profile.username)?;
    profile.key_path = profile
        .key_path
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    profile.validate()?;
    Ok(profile)
}
