//! Read-only queries over the event collection

use std::cmp::Ordering;

use crate::types::{Event, StoreError, StoreResult};
use crate::utils::time::parse_timestamp;

use super::EventStore;

/// List events with optional category filter and sorting
///
/// Category matching is case-insensitive. `sort` values: `"date"` puts the
/// most recent first, `"title"` sorts ascending ignoring case; anything else
/// keeps insertion order.
pub fn list_events(store: &EventStore, category: Option<&str>, sort: &str) -> Vec<Event> {
    let mut events = store.load().events;

    if let Some(filter) = category {
        let filter = filter.to_lowercase();
        events.retain(|event| event.category.to_lowercase() == filter);
    }

    match sort {
        "date" => events.sort_by(newest_first),
        "title" => events.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        _ => {}
    }

    events
}

/// Find a single event by id
pub fn get_by_id(store: &EventStore, id: u64) -> StoreResult<Event> {
    store
        .load()
        .events
        .into_iter()
        .find(|event| event.id == id)
        .ok_or(StoreError::NotFound(id))
}

/// All events whose category matches, insertion-ordered
///
/// An unknown category is an empty result, not an error.
pub fn list_by_category(store: &EventStore, category: &str) -> Vec<Event> {
    let filter = category.to_lowercase();
    let mut events = store.load().events;
    events.retain(|event| event.category.to_lowercase() == filter);
    events
}

/// Descending by parsed date; events with unparseable dates sort after all
/// parseable ones and keep their relative order (the sort is stable)
fn newest_first(a: &Event, b: &Event) -> Ordering {
    match (parse_timestamp(&a.date), parse_timestamp(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
