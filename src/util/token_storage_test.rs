use super::*;

#[test]
fn memory_storage_starts_empty() {
    assert_eq!(MemoryTokenStorage::default().load(), None);
}

#[test]
fn memory_storage_round_trips_and_clears() {
    let storage = MemoryTokenStorage::default();
    storage.store("T");
    assert_eq!(storage.load().as_deref(), Some("T"));
    storage.clear();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_clones_share_slot() {
    let storage = MemoryTokenStorage::with_token("T");
    let observer = storage.clone();
    storage.clear();
    assert_eq!(observer.load(), None);
}

#[test]
fn empty_token_reads_as_absent() {
    let storage = MemoryTokenStorage::with_token("");
    assert_eq!(storage.load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_noop_outside_browser() {
    let storage = LocalTokenStorage::new("token");
    storage.store("T");
    assert_eq!(storage.load(), None);
    storage.clear();
}
