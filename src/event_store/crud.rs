//! Mutating operations (holds the write lock across load-mutate-persist)

use crate::types::{Event, EventPatch, NewEvent, StoreError, StoreResult, DEFAULT_LOCATION};
use crate::utils::time::{now_iso8601, to_iso8601};

use super::EventStore;

/// Create a new event from client input
///
/// Validates the required fields, assigns the next id, normalizes the date
/// and stamps both timestamps with the same instant.
pub fn create(store: &EventStore, draft: NewEvent) -> StoreResult<Event> {
    if !draft.has_required_fields() {
        return Err(StoreError::MissingRequired);
    }

    let _guard = store.write_lock.lock();
    let mut doc = store.load();

    // Next id = current max + 1; gaps left by deletions are not reused
    let id = doc.events.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
    let now = now_iso8601();

    let event = Event {
        id,
        title: draft.title.unwrap_or_default(),
        description: draft.description.unwrap_or_default(),
        date: to_iso8601(&draft.date.unwrap_or_default()),
        category: draft.category.unwrap_or_default(),
        location: draft
            .location
            .filter(|location| !location.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        created_at: now.clone(),
        updated_at: now,
    };

    doc.events.push(event.clone());
    store.persist(&doc)?;
    Ok(event)
}

/// Shallow-merge a patch into an existing event
///
/// Every field present in the patch replaces the stored value; absent fields
/// stay untouched. The id is never taken from the patch and `updatedAt` is
/// always refreshed.
pub fn update(store: &EventStore, id: u64, patch: EventPatch) -> StoreResult<Event> {
    let _guard = store.write_lock.lock();
    let mut doc = store.load();

    let event = doc
        .events
        .iter_mut()
        .find(|event| event.id == id)
        .ok_or(StoreError::NotFound(id))?;

    if let Some(title) = patch.title {
        event.title = title;
    }
    if let Some(description) = patch.description {
        event.description = description;
    }
    if let Some(date) = patch.date {
        event.date = date;
    }
    if let Some(category) = patch.category {
        event.category = category;
    }
    if let Some(location) = patch.location {
        event.location = location;
    }
    event.updated_at = now_iso8601();

    let updated = event.clone();
    store.persist(&doc)?;
    Ok(updated)
}

/// Remove exactly one event, returning the removed record
pub fn delete(store: &EventStore, id: u64) -> StoreResult<Event> {
    let _guard = store.write_lock.lock();
    let mut doc = store.load();

    let index = doc
        .events
        .iter()
        .position(|event| event.id == id)
        .ok_or(StoreError::NotFound(id))?;

    let removed = doc.events.remove(index);
    store.persist(&doc)?;
    Ok(removed)
}
