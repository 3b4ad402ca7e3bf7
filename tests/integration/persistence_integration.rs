//! Durable-store tests: the sled-backed preference store and sessions
//! running over it, including survival across process-style reopens.

use annum::selection::{YearSelection, SELECTED_YEARS_KEY};
use annum::session::YearSelectionStore;
use annum::store::{PreferenceStore, SledPreferenceStore};
use tempfile::TempDir;

#[test]
fn test_preference_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledPreferenceStore::new(temp_dir.path()).unwrap();

    assert!(store.get(SELECTED_YEARS_KEY).unwrap().is_none());
    store.set(SELECTED_YEARS_KEY, "2022,2023,2024").unwrap();
    assert_eq!(
        store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
        Some("2022,2023,2024")
    );

    store.remove(SELECTED_YEARS_KEY).unwrap();
    assert!(store.get(SELECTED_YEARS_KEY).unwrap().is_none());
}

#[test]
fn test_values_persist_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("store.db");

    // First session: write and flush
    {
        let store = SledPreferenceStore::new(&store_path).unwrap();
        store.set(SELECTED_YEARS_KEY, "2021,2024").unwrap();
        store.flush().unwrap();
    }

    // Second session: verify data persisted
    {
        let store = SledPreferenceStore::new(&store_path).unwrap();
        assert_eq!(
            store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
            Some("2021,2024")
        );
    }
}

#[test]
fn test_session_selection_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("prefs.db");

    // First "page load": bootstrap defaults, then change the selection
    {
        let store = SledPreferenceStore::new(&store_path).unwrap();
        let mut session = YearSelectionStore::new(store);
        session.initialize();
        session.toggle_year(2023);
        session.toggle_year(2021);
        session.store().flush().unwrap();
    }

    // Second "page load": the changed selection is restored as-is
    {
        let store = SledPreferenceStore::new(&store_path).unwrap();
        let mut session = YearSelectionStore::new(store);
        let selection = session.initialize();
        assert_eq!(selection, YearSelection::from_years([2021, 2022, 2024]));
    }
}

#[test]
fn test_external_clear_then_initialize_restores_default() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledPreferenceStore::new(temp_dir.path()).unwrap();
    store.set(SELECTED_YEARS_KEY, "2022,2024").unwrap();
    store.remove(SELECTED_YEARS_KEY).unwrap();

    let mut session = YearSelectionStore::new(store);
    let selection = session.initialize();
    assert_eq!(selection, YearSelection::default());
}
