//! Integration tests for the event store

use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

use events_api::types::{EventPatch, NewEvent, StoreError};
use events_api::{EventStore, DEFAULT_LOCATION};

fn setup_store() -> (EventStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = EventStore::with_file_path(temp_dir.path().join("events.json"));
    (store, temp_dir)
}

fn draft(title: &str, date: &str, category: &str) -> NewEvent {
    NewEvent {
        title: Some(title.to_string()),
        date: Some(date.to_string()),
        category: Some(category.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_create_assigns_first_id_and_defaults() {
    let (store, _dir) = setup_store();

    let event = store
        .create(draft("Launch", "2024-01-01", "Tech"))
        .unwrap();

    assert_eq!(event.id, 1);
    assert_eq!(event.description, "");
    assert_eq!(event.location, DEFAULT_LOCATION);
    assert_eq!(event.date, "2024-01-01T00:00:00.000Z");
    assert_eq!(event.created_at, event.updated_at);
}

#[test]
fn test_ids_increase_from_current_max() {
    let (store, _dir) = setup_store();

    store.create(draft("A", "2024-01-01", "Tech")).unwrap();
    store.create(draft("B", "2024-01-02", "Tech")).unwrap();
    store.create(draft("C", "2024-01-03", "Tech")).unwrap();

    // Leave a gap: ids {1, 3} remain, so the next id is 4, not 2
    store.delete(2).unwrap();
    let event = store.create(draft("D", "2024-01-04", "Tech")).unwrap();

    assert_eq!(event.id, 4);
}

#[test]
fn test_create_requires_title_date_category() {
    let (store, _dir) = setup_store();

    let err = store.create(NewEvent::default()).unwrap_err();
    assert!(matches!(err, StoreError::MissingRequired));
    assert_eq!(err.to_string(), "Required fields: title, date, category");

    // Nothing was persisted
    assert!(!store.file_path().exists());
}

#[test]
fn test_create_keeps_unparseable_date_verbatim() {
    let (store, _dir) = setup_store();

    let event = store
        .create(draft("Mystery", "sometime soon", "Tech"))
        .unwrap();

    assert_eq!(event.date, "sometime soon");
}

#[test]
fn test_update_merges_partially() {
    let (store, _dir) = setup_store();

    let created = store
        .create(draft("Launch", "2024-01-01", "Tech"))
        .unwrap();

    thread::sleep(Duration::from_millis(5));
    let updated = store
        .update(
            created.id,
            EventPatch {
                title: Some("New Title".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[test]
fn test_update_keeps_original_id() {
    let (store, _dir) = setup_store();

    store.create(draft("Launch", "2024-01-01", "Tech")).unwrap();
    let updated = store
        .update(
            1,
            EventPatch {
                id: Some(99),
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, 1);
    assert!(store.get_by_id(99).is_err());
}

#[test]
fn test_update_missing_event_is_not_found() {
    let (store, _dir) = setup_store();

    let err = store.update(7, EventPatch::default()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(7)));
}

#[test]
fn test_delete_returns_removed_record() {
    let (store, _dir) = setup_store();

    store.create(draft("Keep", "2024-01-01", "Tech")).unwrap();
    store.create(draft("Drop", "2024-01-02", "Tech")).unwrap();

    let removed = store.delete(2).unwrap();
    assert_eq!(removed.title, "Drop");

    assert!(matches!(store.get_by_id(2), Err(StoreError::NotFound(2))));
    assert_eq!(store.list_events(None, "none").len(), 1);
}

#[test]
fn test_delete_missing_leaves_document_untouched() {
    let (store, _dir) = setup_store();

    store.create(draft("Launch", "2024-01-01", "Tech")).unwrap();
    let before = fs::read_to_string(store.file_path()).unwrap();

    let err = store.delete(999).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(999)));

    let after = fs::read_to_string(store.file_path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_category_filter_is_case_insensitive() {
    let (store, _dir) = setup_store();

    store.create(draft("Concert", "2024-05-01", "Music")).unwrap();
    store.create(draft("Jam", "2024-05-02", "music")).unwrap();
    store.create(draft("Meetup", "2024-05-03", "Tech")).unwrap();

    let upper = store.list_by_category("MUSIC");
    let lower = store.list_by_category("music");

    assert_eq!(upper.len(), 2);
    let upper_ids: Vec<u64> = upper.iter().map(|e| e.id).collect();
    let lower_ids: Vec<u64> = lower.iter().map(|e| e.id).collect();
    assert_eq!(upper_ids, lower_ids);

    assert_eq!(store.list_events(Some("Music"), "none").len(), 2);
}

#[test]
fn test_unknown_category_is_empty_not_an_error() {
    let (store, _dir) = setup_store();

    store.create(draft("Launch", "2024-01-01", "Tech")).unwrap();
    assert!(store.list_by_category("nonexistent").is_empty());
}

#[test]
fn test_sort_by_title_is_ascending() {
    let (store, _dir) = setup_store();

    store.create(draft("Banana", "2024-01-01", "Fruit")).unwrap();
    store.create(draft("Apple", "2024-01-02", "Fruit")).unwrap();

    let events = store.list_events(None, "title");
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Apple", "Banana"]);
}

#[test]
fn test_sort_by_date_is_newest_first_with_unparseable_last() {
    let (store, _dir) = setup_store();

    store.create(draft("Old", "2024-01-01", "Tech")).unwrap();
    store.create(draft("Mystery", "someday", "Tech")).unwrap();
    store.create(draft("New", "2024-06-01", "Tech")).unwrap();

    let events = store.list_events(None, "date");
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["New", "Old", "Mystery"]);
}

#[test]
fn test_unknown_sort_keeps_insertion_order() {
    let (store, _dir) = setup_store();

    store.create(draft("B", "2024-06-01", "Tech")).unwrap();
    store.create(draft("A", "2024-01-01", "Tech")).unwrap();

    let events = store.list_events(None, "shoesize");
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["B", "A"]);
}

#[test]
fn test_collection_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("events.json");

    let store = EventStore::with_file_path(&path);
    store.create(draft("Launch", "2024-01-01", "Tech")).unwrap();
    store.create(draft("Concert", "2024-05-01", "Music")).unwrap();

    let reopened = EventStore::with_file_path(&path);
    let events = reopened.load().events;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Launch");
    assert_eq!(events[1].id, 2);
}

#[test]
fn test_load_tolerates_missing_file() {
    let (store, _dir) = setup_store();
    assert!(store.load().events.is_empty());
}

#[test]
fn test_load_tolerates_malformed_document() {
    let (store, _dir) = setup_store();

    fs::create_dir_all(store.file_path().parent().unwrap()).unwrap();
    fs::write(store.file_path(), "{not json at all").unwrap();

    assert!(store.load().events.is_empty());
    assert!(matches!(store.get_by_id(1), Err(StoreError::NotFound(1))));
}

#[test]
fn test_persisted_document_is_pretty_printed() {
    let (store, _dir) = setup_store();

    store.create(draft("Launch", "2024-01-01", "Tech")).unwrap();
    let content = fs::read_to_string(store.file_path()).unwrap();

    assert!(content.starts_with("{\n  \"events\""));
    assert!(content.contains("\"createdAt\""));
    assert!(!store.file_path().with_extension("tmp").exists());
}

#[test]
fn test_concurrent_creates_assign_distinct_ids() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(EventStore::with_file_path(
        temp_dir.path().join("events.json"),
    ));

    let mut handles = vec![];
    for i in 0..10 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            store
                .create(draft(&format!("Event {}", i), "2024-01-01", "Tech"))
                .unwrap()
        }));
    }

    let mut ids: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked").id)
        .collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 10, "All ids should be pairwise distinct");
    assert_eq!(store.list_events(None, "none").len(), 10);
}
