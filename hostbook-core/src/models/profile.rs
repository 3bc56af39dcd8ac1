//! Connection profile model.
//!
//! A profile is the unit stored in the address book: where to connect, as
//! whom, on which port and with which private key.

use std::fmt;

use crate::error::StoreResult;
use crate::models::validation::{parse_port, require_non_empty, resolve_key_path};

/// Port used by the remote-login client when none is given
pub const DEFAULT_SSH_PORT: u16 = 22;

/// A named connection record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    /// Unique key within the store
    pub name: String,
    /// Remote host name or address
    pub hostname: String,
    /// Remote login user
    pub username: String,
    /// Remote port, 22 unless overridden
    pub port: u16,
    /// Private key passed to the client with `-i`
    pub key_path: Option<String>,
}

impl ConnectionProfile {
    /// Creates a profile on the default port without a private key
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        hostname: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
            username: username.into(),
            port: DEFAULT_SSH_PORT,
            key_path: None,
        }
    }

    /// Sets the port
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the private key path
    #[must_use]
    pub fn with_key_path(mut self, key_path: impl Into<String>) -> Self {
        self.key_path = Some(key_path.into());
        self
    }

    /// Returns the `username@hostname` destination token
    #[must_use]
    pub fn destination(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }

    /// Returns true if the profile uses a non-default port
    #[must_use]
    pub const fn has_custom_port(&self) -> bool {
        self.port != DEFAULT_SSH_PORT
    }

    /// Checks the structural field rules.
    ///
    /// Key path existence is not checked here; it is verified once when the
    /// path is entered (see [`ProfileDraft::build`]).
    ///
    /// # Errors
    ///
    /// Returns a validation error if a required field is blank or the port
    /// is zero.
    pub fn validate(&self) -> StoreResult<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("hostname", &self.hostname)?;
        require_non_empty("username", &self.username)?;
        if self.port == 0 {
            return Err(crate::error::StoreError::validation(
                "port",
                "must be between 1 and 65535",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name, self.destination(), self.port)
    }
}

/// Raw user input for a new profile
///
/// Every field is kept as entered so that validation happens in one place
/// and reports which field was wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    /// Profile name
    pub name: String,
    /// Host name or address
    pub hostname: String,
    /// Login user
    pub username: String,
    /// Port text; `None` means the default port
    pub port: Option<String>,
    /// Private key path; `None` means no key
    pub key_path: Option<String>,
}

impl ProfileDraft {
    /// Validates the input and produces a profile.
    ///
    /// Text fields are trimmed, the port is parsed, and a key path has `~`
    /// expanded and must name an existing file.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn build(&self) -> StoreResult<ConnectionProfile> {
        let port = match self.port.as_deref() {
            Some(text) => parse_port(text)?,
            None => DEFAULT_SSH_PORT,
        };
        let key_path = self.key_path.as_deref().map(resolve_key_path).transpose()?;

        Ok(ConnectionProfile {
            name: require_non_empty("name", &self.name)?,
            hostname: require_non_empty("hostname", &self.hostname)?,
            username: require_non_empty("username", &self.username)?,
            port,
            key_path,
        })
    }
}

/// How an edit treats the private key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KeyPathUpdate {
    /// Leave the current key untouched
    #[default]
    Keep,
    /// Use a new key path (raw user input)
    Set(String),
    /// Remove the key
    Clear,
}

/// Field-level overrides applied by [`ProfileStore::edit`](crate::store::ProfileStore::edit)
///
/// `None` fields keep their current value. Values are raw user text and
/// are validated the same way as a [`ProfileDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New host name
    pub hostname: Option<String>,
    /// New login user
    pub username: Option<String>,
    /// New port text
    pub port: Option<String>,
    /// Private key change
    pub key_path: KeyPathUpdate,
}

impl ProfileUpdate {
    /// Returns true if the update changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hostname.is_none()
            && self.username.is_none()
            && self.port.is_none()
            && self.key_path == KeyPathUpdate::Keep
    }

    /// Applies the overrides to a copy of `current`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any supplied value is invalid; the
    /// current profile is never modified.
    pub fn apply(&self, current: &ConnectionProfile) -> StoreResult<ConnectionProfile> {
        let mut updated = current.clone();

        if let Some(ref hostname) = self.hostname {
            updated.hostname = require_non_empty("hostname", hostname)?;
        }
        if let Some(ref username) = self.username {
            updated.username = require_non_empty("username", username)?;
        }
        if let Some(ref port) = self.port {
            updated.port = parse_port(port)?;
        }
        match self.key_path {
            KeyPathUpdate::Keep => {}
            KeyPathUpdate::Set(ref path) => updated.key_path = Some(resolve_key_path(path)?),
            KeyPathUpdate::Clear => updated.key_path = None,
        }

        Ok(updated)
    }
}
