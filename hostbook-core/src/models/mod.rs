//! Core data models for `Hostbook`

mod profile;
pub mod validation;

pub use profile::{
    ConnectionProfile, DEFAULT_SSH_PORT, KeyPathUpdate, ProfileDraft, ProfileUpdate,
};
