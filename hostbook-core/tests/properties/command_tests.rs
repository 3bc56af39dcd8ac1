//! Property-based tests for remote-login command construction
//!
//! The argument order is fixed: program, optional `-p <port>`, optional
//! `-i <key>`, destination last.

use proptest::prelude::*;
use hostbook_core::launcher::{CommandBuilder, build_command};
use hostbook_core::models::ConnectionProfile;

use super::generators::arb_profile;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_program_first_destination_last(profile in arb_profile()) {
        let tokens = build_command(&profile);
        prop_assert_eq!(tokens.first().map(String::as_str), Some("ssh"));
        prop_assert_eq!(
            tokens.last().cloned(),
            Some(format!("{}@{}", profile.username, profile.hostname))
        );
    }

    #[test]
    fn prop_port_flag_only_for_custom_port(profile in arb_profile()) {
        let tokens = build_command(&profile);
        if profile.port == 22 {
            prop_assert!(!tokens.iter().any(|t| t == "-p"));
        } else {
            prop_assert_eq!(tokens[1].as_str(), "-p");
            prop_assert_eq!(tokens[2].clone(), profile.port.to_string());
        }
    }

    #[test]
    fn prop_identity_flag_before_destination(profile in arb_profile()) {
        let tokens = build_command(&profile);
        let position = tokens.iter().position(|t| t == "-i");
        match profile.key_path {
            Some(ref key_path) => {
                let index = position.unwrap();
                prop_assert_eq!(&tokens[index + 1], key_path);
                prop_assert_eq!(index + 2, tokens.len() - 1);
            }
            None => prop_assert!(position.is_none()),
        }
    }

    #[test]
    fn prop_token_count(profile in arb_profile()) {
        let expected = 2
            + if profile.port == 22 { 0 } else { 2 }
            + if profile.key_path.is_some() { 2 } else { 0 };
        prop_assert_eq!(build_command(&profile).len(), expected);
    }

    #[test]
    fn prop_build_is_deterministic(profile in arb_profile()) {
        let builder = CommandBuilder::default();
        prop_assert_eq!(builder.build(&profile), builder.build(&profile));
    }
}

#[test]
fn test_default_profile_scenario() {
    let profile = ConnectionProfile::new("db1", "10.0.0.5", "ops");
    assert_eq!(build_command(&profile), vec!["ssh", "ops@10.0.0.5"]);
}

#[test]
fn test_custom_port_and_key_scenario() {
    let profile = ConnectionProfile::new("web1", "example.com", "deploy")
        .with_port(2222)
        .with_key_path("/home/u/.ssh/id_ed25519");
    assert_eq!(
        build_command(&profile),
        vec![
            "ssh",
            "-p",
            "2222",
            "-i",
            "/home/u/.ssh/id_ed25519",
            "deploy@example.com",
        ]
    );
}
