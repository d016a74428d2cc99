//! Event store - core data engine
//!
//! Owns the backing JSON document and every operation over it: tolerant
//! loads, filtered/sorted listings, point lookups and the three mutations.

mod crud;
mod query;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::types::{Event, EventDocument, EventPatch, NewEvent, StoreResult};
use crate::utils::atomic::atomic_write;

/// File-backed event store
///
/// The backing document is the single source of truth: every operation loads
/// it fresh from disk, and mutations rewrite it in full before acknowledging.
/// The mutex serializes load-mutate-persist cycles so concurrent in-process
/// writers cannot drop each other's changes; reads take no lock. Writers in
/// other processes remain unsynchronized.
pub struct EventStore {
    pub(crate) file_path: PathBuf,
    pub(crate) write_lock: Mutex<()>,
}

impl EventStore {
    /// Create a store backed by the configured document path
    ///
    /// `EVENTS_FILE_PATH` overrides the location (absolute, or joined to the
    /// current directory); the default is `data/events.json`.
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let file_path = match env::var("EVENTS_FILE_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    PathBuf::from(path)
                } else {
                    current_dir.join(path)
                }
            }
            Err(_) => current_dir.join("data").join("events.json"),
        };

        Self::with_file_path(file_path)
    }

    /// Create a store backed by an explicit document path
    pub fn with_file_path(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the collection from disk
    ///
    /// Tolerant read: a missing, unreadable or unparseable document yields
    /// the empty collection so reads keep serving. A present-but-corrupt
    /// file is logged before being ignored.
    pub fn load(&self) -> EventDocument {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(_) => return EventDocument::default(),
        };

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(
                    path = %self.file_path.display(),
                    %err,
                    "backing document is not valid JSON, serving empty collection"
                );
                EventDocument::default()
            }
        }
    }

    /// Rewrite the backing document with the full collection
    ///
    /// Pretty-printed for human diffability, written via rename so readers
    /// never observe a partial document. Failures propagate: a dropped write
    /// must not be acknowledged as success.
    pub(crate) fn persist(&self, doc: &EventDocument) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(doc)?;
        atomic_write(&self.file_path, &json)?;
        Ok(())
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export operations from submodules as methods
impl EventStore {
    /// List events, optionally filtered by category, ordered per `sort`
    pub fn list_events(&self, category: Option<&str>, sort: &str) -> Vec<Event> {
        query::list_events(self, category, sort)
    }

    /// Find a single event by id
    pub fn get_by_id(&self, id: u64) -> StoreResult<Event> {
        query::get_by_id(self, id)
    }

    /// All events in a category, insertion-ordered
    pub fn list_by_category(&self, category: &str) -> Vec<Event> {
        query::list_by_category(self, category)
    }

    /// Create a new event from client input
    pub fn create(&self, draft: NewEvent) -> StoreResult<Event> {
        crud::create(self, draft)
    }

    /// Shallow-merge a patch into an existing event
    pub fn update(&self, id: u64, patch: EventPatch) -> StoreResult<Event> {
        crud::update(self, id, patch)
    }

    /// Remove an event, returning the removed record
    pub fn delete(&self, id: u64) -> StoreResult<Event> {
        crud::delete(self, id)
    }
}
