//! On-disk format of the profile store.
//!
//! The file is a JSON object keyed by profile name:
//!
//! ```json
//! {
//!     "web1": {
//!         "hostname": "example.com",
//!         "username": "deploy",
//!         "port": 2222,
//!         "key_path": "/home/u/.ssh/id_ed25519"
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{ConnectionProfile, DEFAULT_SSH_PORT};

/// One value of the top-level object; the name lives in the key
#[derive(Debug, Serialize, Deserialize)]
struct ProfileRecord {
    hostname: String,
    username: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default, alias = "keyPath")]
    key_path: Option<String>,
}

const fn default_port() -> u16 {
    DEFAULT_SSH_PORT
}

impl ProfileRecord {
    fn from_profile(profile: &ConnectionProfile) -> Self {
        Self {
            hostname: profile.hostname.clone(),
            username: profile.username.clone(),
            port: profile.port,
            key_path: profile.key_path.clone(),
        }
    }

    /// Blank key paths read back as no key
    fn into_profile(self, name: String) -> ConnectionProfile {
        ConnectionProfile {
            name,
            hostname: self.hostname,
            username: self.username,
            port: self.port,
            key_path: self.key_path.filter(|k| !k.trim().is_empty()),
        }
    }
}

/// Reads profiles from `path`.
///
/// A missing file is an empty store. Records are checked against the
/// structural field rules but key files are not looked up.
pub(super) fn read_profiles(path: &Path) -> ConfigResult<Vec<ConnectionProfile>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Profile file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ConfigError::Persistence {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let records: BTreeMap<String, ProfileRecord> =
        serde_json::from_str(&content).map_err(|e| ConfigError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let profiles: Vec<ConnectionProfile> = records
        .into_iter()
        .map(|(name, record)| record.into_profile(name))
        .collect();

    for profile in &profiles {
        profile.validate().map_err(|e| ConfigError::Corrupt {
            path: path.to_path_buf(),
            reason: format!("profile '{}': {e}", profile.name),
        })?;
    }

    Ok(profiles)
}

/// Overwrites `path` with the given profiles, creating parent directories.
pub(super) fn write_profiles<'a>(
    path: &Path,
    profiles: impl Iterator<Item = &'a ConnectionProfile>,
) -> ConfigResult<()> {
    let records: BTreeMap<&str, ProfileRecord> = profiles
        .map(|p| (p.name.as_str(), ProfileRecord::from_profile(p)))
        .collect();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| ConfigError::Serialize {
            what: "profiles",
            reason: e.to_string(),
        })?;
    buf.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Persistence {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, buf).map_err(|source| ConfigError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = read_profiles(&dir.path().join("absent.json")).unwrap();
        assert!(profiles.is_empty());
    }

    #[test]
    fn test_reads_camel_case_key_path_and_default_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"{"db1": {"hostname": "10.0.0.5", "username": "ops", "keyPath": "/k"}}"#,
        )
        .unwrap();

        let profiles = read_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "db1");
        assert_eq!(profiles[0].port, 22);
        assert_eq!(profiles[0].key_path.as_deref(), Some("/k"));
    }

    #[test]
    fn test_reads_null_key_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"{"db1": {"hostname": "h", "username": "u", "port": 2200, "key_path": null}}"#,
        )
        .unwrap();

        let profiles = read_profiles(&path).unwrap();
        assert_eq!(profiles[0].port, 2200);
        assert!(profiles[0].key_path.is_none());
    }

    #[test]
    fn test_reads_blank_key_path_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"{"db1": {"hostname": "10.0.0.5", "username": "ops", "key_path": ""},
                "db2": {"hostname": "10.0.0.6", "username": "ops", "keyPath": "  "}}"#,
        )
        .unwrap();

        let profiles = read_profiles(&path).unwrap();
        assert!(profiles.iter().all(|p| p.key_path.is_none()));
        assert_eq!(
            crate::launcher::build_command(&profiles[0]),
            vec!["ssh".to_string(), "ops@10.0.0.5".to_string()]
        );
    }

    #[test]
    fn test_wrong_structure_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(&path, r#"["db1", "web1"]"#).unwrap();
        assert!(matches!(
            read_profiles(&path),
            Err(ConfigError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_out_of_range_port_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"{"db1": {"hostname": "h", "username": "u", "port": 0}}"#,
        )
        .unwrap();
        assert!(matches!(
            read_profiles(&path),
            Err(ConfigError::Corrupt { .. })
        ));

        fs::write(
            &path,
            r#"{"db1": {"hostname": "h", "username": "u", "port": 70000}}"#,
        )
        .unwrap();
        assert!(matches!(
            read_profiles(&path),
            Err(ConfigError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_write_uses_four_space_indent_and_null_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.json");
        let profile = ConnectionProfile::new("db1", "10.0.0.5", "ops");

        write_profiles(&path, std::iter::once(&profile)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    \"db1\": {\n        \"hostname\": \"10.0.0.5\""));
        assert!(content.contains("\"key_path\": null"));
        assert!(content.ends_with("}\n"));
    }
}
