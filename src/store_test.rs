use super::*;
use crate::testing::FailingStore;

const KEY: &str = "welcome_admin_theme";

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get_item(KEY).unwrap(), None);
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert!(store.remove_item(KEY).is_ok());
}

// =============================================================
// load / save
// =============================================================

#[test]
fn save_dark_then_load_returns_dark() {
    let store = MemoryStore::new();
    save(&store, KEY, Some(Preference::Dark)).unwrap();
    assert_eq!(store.get_item(KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(load(&store, KEY).unwrap(), Some(Preference::Dark));
}

#[test]
fn save_unset_removes_key() {
    let store = MemoryStore::new();
    save(&store, KEY, Some(Preference::Light)).unwrap();
    save(&store, KEY, None).unwrap();
    assert!(store.is_empty());
    assert_eq!(load(&store, KEY).unwrap(), None);
}

#[test]
fn load_unrecognized_value_is_unset() {
    let store = MemoryStore::new();
    store.set_item(KEY, "sepia").unwrap();
    assert_eq!(load(&store, KEY).unwrap(), None);
}

#[test]
fn load_other_key_is_unaffected() {
    let store = MemoryStore::new();
    save(&store, "other", Some(Preference::Dark)).unwrap();
    assert_eq!(load(&store, KEY).unwrap(), None);
}

// =============================================================
// Failing storage
// =============================================================

#[test]
fn load_surfaces_storage_error() {
    let err = load(&FailingStore, KEY).unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn load_or_unset_maps_failure_to_unset() {
    assert_eq!(load_or_unset(&FailingStore, KEY), None);
}

#[test]
fn save_surfaces_storage_error() {
    assert!(save(&FailingStore, KEY, Some(Preference::Dark)).is_err());
    assert!(save(&FailingStore, KEY, None).is_err());
}

#[test]
fn save_or_ignore_reports_outcome() {
    assert!(!save_or_ignore(&FailingStore, KEY, Some(Preference::Dark)));
    assert!(save_or_ignore(&MemoryStore::new(), KEY, Some(Preference::Dark)));
}
