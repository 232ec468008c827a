//! Preferences persistence through the JSON file backend.

use campus_events::domain::{Facet, FacetAllowLists};
use campus_events::storage::{JsonFileStore, KeyValueStore, MemoryStore, PreferencesStore};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn open(dir: &TempDir) -> PreferencesStore {
    let backend = JsonFileStore::open(dir.path().join("prefs").join("preferences.json"))
        .expect("open backend");
    PreferencesStore::load(Box::new(backend)).expect("load preferences")
}

#[test]
fn fresh_file_starts_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = open(&dir);
    assert_eq!(prefs.get(), &FacetAllowLists::default());
}

#[test]
fn changes_survive_reopening() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut prefs = open(&dir);
        prefs.toggle(Facet::Cost, "Paid").expect("toggle");
        prefs.add(Facet::Location, "Boathouse").expect("add");
    }

    let prefs = open(&dir);
    assert_eq!(prefs.get().costs.as_slice(), ["Free", "Ticketed"]);
    assert!(prefs.get().locations.contains("Boathouse"));
}

#[test]
fn adding_twice_keeps_one_copy() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut prefs = open(&dir);
        assert!(prefs.add(Facet::Location, "New Lab").expect("first add"));
        assert!(!prefs.add(Facet::Location, "New Lab").expect("second add"));
    }

    let prefs = open(&dir);
    let count = prefs
        .get()
        .locations
        .iter()
        .filter(|v| *v == "New Lab")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn blank_values_are_ignored() {
    let mut prefs = PreferencesStore::in_memory();
    assert!(!prefs.add(Facet::Category, "   ").expect("add"));
    assert!(prefs.add(Facet::Category, "  Music ").expect("add"));
    assert!(prefs.get().categories.contains("Music"));
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let backend = MemoryStore::with_entries([
        ("enabledLocations", "not json"),
        ("enabledCategories", r#"{"Sports": true}"#),
        ("enabledCosts", r#"["Free"]"#),
    ]);
    let prefs = PreferencesStore::load(Box::new(backend)).expect("load");

    let defaults = FacetAllowLists::default();
    assert_eq!(prefs.get().locations, defaults.locations);
    assert_eq!(prefs.get().categories, defaults.categories);
    assert_eq!(prefs.get().costs.as_slice(), ["Free"]);
}

#[test]
fn unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ definitely not json").expect("write");

    assert!(JsonFileStore::open(&path).is_err());
}

#[test]
fn every_key_is_written_as_a_json_array() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    {
        let backend = JsonFileStore::open(&path).expect("open");
        let mut prefs = PreferencesStore::load(Box::new(backend)).expect("load");
        prefs.set_facet(Facet::Cost, ["Free"]).expect("set facet");
    }

    let backend = JsonFileStore::open(&path).expect("reopen");
    assert_eq!(backend.get("enabledCosts").expect("get").as_deref(), Some(r#"["Free"]"#));
    for facet in [Facet::Location, Facet::Category] {
        let raw = backend.get(facet.storage_key()).expect("get").expect("key written");
        let values: Vec<String> = serde_json::from_str(&raw).expect("string array");
        assert_eq!(values.len(), facet.default_values().len());
    }
}

#[test]
fn subscribers_see_changes_until_unsubscribed() {
    let mut prefs = PreferencesStore::in_memory();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let id = prefs.subscribe(move |lists| {
        sink.lock().expect("lock").push(lists.costs.len());
    });

    prefs.remove(Facet::Cost, "Paid").expect("remove");
    // No change, no notification.
    prefs.remove(Facet::Cost, "Paid").expect("remove again");
    prefs.reset_to_defaults().expect("reset");

    assert!(prefs.unsubscribe(id));
    assert!(!prefs.unsubscribe(id));
    prefs.remove(Facet::Cost, "Free").expect("remove after unsubscribe");

    assert_eq!(*seen.lock().expect("lock"), vec![2, 3]);
}
