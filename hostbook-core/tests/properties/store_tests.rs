//! Property-based tests for the profile store
//!
//! 1. Saving and loading a store yields an equal store
//! 2. Listing is idempotent and sorted
//! 3. Failed add/edit/delete never change the store

use proptest::prelude::*;
use hostbook_core::error::StoreError;
use hostbook_core::models::ProfileUpdate;
use hostbook_core::store::ProfileStore;
use tempfile::TempDir;

use super::generators::{arb_hostname, arb_name, arb_profile, arb_store};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_save_load_round_trip(store in arb_store()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profiles.json");

        store.save(&path).unwrap();
        let loaded = ProfileStore::load(&path).unwrap();
        prop_assert_eq!(&loaded, &store);

        // A second cycle produces byte-identical output
        let first = std::fs::read_to_string(&path).unwrap();
        loaded.save(&path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_list_is_idempotent_and_sorted(store in arb_store()) {
        let first: Vec<_> = store.list().cloned().collect();
        let second: Vec<_> = store.list().cloned().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), store.len());

        let names: Vec<_> = first.iter().map(|p| p.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }

    #[test]
    fn prop_duplicate_add_leaves_store_unchanged(
        store in arb_store(),
        candidate in arb_profile(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!store.is_empty());
        let existing = store.names().nth(pick.index(store.len())).unwrap().to_string();

        let mut mutated = store.clone();
        let mut duplicate = candidate;
        duplicate.name = existing.clone();

        prop_assert_eq!(
            mutated.add(duplicate),
            Err(StoreError::DuplicateName(existing))
        );
        prop_assert_eq!(mutated, store);
    }

    #[test]
    fn prop_missing_name_leaves_store_unchanged(
        store in arb_store(),
        missing in arb_name(),
        hostname in arb_hostname(),
    ) {
        // Generated store names always carry an `_<index>` suffix
        let missing = format!("{missing}-absent");
        prop_assume!(!store.contains(&missing));

        let mut mutated = store.clone();
        prop_assert_eq!(
            mutated.delete(&missing),
            Err(StoreError::NotFound(missing.clone()))
        );

        let update = ProfileUpdate {
            hostname: Some(hostname),
            ..ProfileUpdate::default()
        };
        prop_assert_eq!(
            mutated.edit(&missing, &update).cloned(),
            Err(StoreError::NotFound(missing.clone()))
        );
        prop_assert_eq!(mutated, store);
    }

    #[test]
    fn prop_add_then_delete_restores_store(store in arb_store(), profile in arb_profile()) {
        let mut profile = profile;
        profile.name = format!("{}-new", profile.name);
        prop_assume!(!store.contains(&profile.name));

        let mut mutated = store.clone();
        mutated.add(profile.clone()).unwrap();
        prop_assert_eq!(mutated.len(), store.len() + 1);

        mutated.delete(&profile.name).unwrap();
        prop_assert_eq!(mutated, store);
    }
}
