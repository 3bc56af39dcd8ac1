//! Shared proptest strategies for connection profiles

use proptest::prelude::*;
use hostbook_core::models::ConnectionProfile;
use hostbook_core::store::ProfileStore;

/// Generates a valid profile name
pub fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,20}"
}

/// Generates a hostname, FQDN or IPv4 address
pub fn arb_hostname() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,15}",
        "[a-z][a-z0-9]{0,7}\\.[a-z]{2,4}",
        (1u8..255u8, 0u8..255u8, 0u8..255u8, 1u8..255u8)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
    ]
}

/// Generates a login name
pub fn arb_username() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_-]{0,15}"
}

/// Generates a port, biased towards the default
pub fn arb_port() -> impl Strategy<Value = u16> {
    prop_oneof![Just(22u16), 1u16..=65535u16]
}

/// Generates an optional absolute key path
pub fn arb_key_path() -> impl Strategy<Value = Option<String>> {
    prop::option::of("/[a-z]{1,8}(/[a-zA-Z0-9_. -]{1,12}){0,3}")
}

/// Generates a single profile
pub fn arb_profile() -> impl Strategy<Value = ConnectionProfile> {
    (
        arb_name(),
        arb_hostname(),
        arb_username(),
        arb_port(),
        arb_key_path(),
    )
        .prop_map(|(name, hostname, username, port, key_path)| ConnectionProfile {
            name,
            hostname,
            username,
            port,
            key_path,
        })
}

/// Generates a store of up to ten profiles with unique names
pub fn arb_store() -> impl Strategy<Value = ProfileStore> {
    prop::collection::vec(arb_profile(), 0..10).prop_map(|profiles| {
        let mut store = ProfileStore::new();
        for (i, mut profile) in profiles.into_iter().enumerate() {
            // Ensure unique names by appending index
            profile.name = format!("{}_{}", profile.name, i);
            store.add(profile).unwrap();
        }
        store
    })
}
