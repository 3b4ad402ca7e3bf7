//! Recovery tests: invalid or messy persisted values are repaired once and
//! the repair is written back so it does not recur.

use annum::selection::{YearSelection, SELECTED_YEARS_KEY};
use annum::session::YearSelectionStore;
use annum::store::{MemoryPreferenceStore, PreferenceStore};

#[test]
fn test_fully_invalid_value_falls_back_to_default_and_overwrites() {
    let store = MemoryPreferenceStore::new();
    store.set(SELECTED_YEARS_KEY, "invalid,data").unwrap();

    let mut session = YearSelectionStore::new(store.clone());
    let selection = session.initialize();

    assert!(!selection.is_empty());
    assert_eq!(selection, YearSelection::default());
    assert_eq!(
        store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
        Some("2022,2023,2024")
    );
}

#[test]
fn test_junk_tokens_are_dropped_and_repair_is_written_back() {
    let store = MemoryPreferenceStore::new();
    store.set(SELECTED_YEARS_KEY, "2022,abc,2024").unwrap();

    let mut session = YearSelectionStore::new(store.clone());
    let selection = session.initialize();

    assert_eq!(selection, YearSelection::from_years([2022, 2024]));
    assert_eq!(
        store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
        Some("2022,2024")
    );
}

#[test]
fn test_repair_is_idempotent() {
    let store = MemoryPreferenceStore::new();
    store.set(SELECTED_YEARS_KEY, " 2021 ,junk,2024,").unwrap();

    let mut session = YearSelectionStore::new(store.clone());
    let first = session.initialize();
    let repaired = store.get(SELECTED_YEARS_KEY).unwrap().unwrap();
    assert_eq!(repaired, "2021,2024");

    // A second read sees the canonical value; nothing changes further.
    let second = session.initialize();
    assert_eq!(first, second);
    assert_eq!(
        store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
        Some("2021,2024")
    );
}

#[test]
fn test_empty_persisted_value_is_repaired_to_default() {
    let store = MemoryPreferenceStore::new();
    store.set(SELECTED_YEARS_KEY, "").unwrap();

    let mut session = YearSelectionStore::new(store.clone());
    let selection = session.initialize();

    assert_eq!(selection, YearSelection::default());
    assert_eq!(
        store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
        Some("2022,2023,2024")
    );
}

#[test]
fn test_leading_zeros_are_canonicalized() {
    let store = MemoryPreferenceStore::new();
    store.set(SELECTED_YEARS_KEY, "02021,2024").unwrap();

    let mut session = YearSelectionStore::new(store.clone());
    let selection = session.initialize();

    assert_eq!(selection, YearSelection::from_years([2021, 2024]));
    assert_eq!(
        store.get(SELECTED_YEARS_KEY).unwrap().as_deref(),
        Some("2021,2024")
    );
}
