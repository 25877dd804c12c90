use super::*;

#[test]
fn memory_storage_starts_empty() {
    assert_eq!(MemorySessionStorage::new().read(), None);
}

#[test]
fn memory_storage_write_replaces_previous_value() {
    let storage = MemorySessionStorage::new();
    storage.write("first").unwrap();
    storage.write("second").unwrap();
    assert_eq!(storage.read().as_deref(), Some("second"));
}

#[test]
fn memory_storage_erase_is_idempotent() {
    let storage = MemorySessionStorage::with_raw("x");
    storage.erase();
    storage.erase();
    assert_eq!(storage.read(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_a_browser() {
    let storage = BrowserSessionStorage::default();
    assert!(storage.write("{}").is_ok());
    assert_eq!(storage.read(), None);
    storage.erase();
}
