//! Events API Server
//!
//! A CRUD record store for event entities, backed by a single JSON document
//! on disk and exposed over an HTTP REST API.
//!
//! # Features
//!
//! - **File-Backed**: one pretty-printed JSON document is the source of truth
//! - **Tolerant Reads**: a missing or corrupt document serves as empty, never 500s
//! - **Atomic Writes**: full-document rewrites go through a temp-file rename
//! - **Filter & Sort**: case-insensitive category filter, date/title ordering
//! - **Serialized Writers**: an internal mutex prevents in-process lost updates
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, EventDocument, input structs, errors)
//! - `event_store`: Core data engine with load/persist, queries and mutations
//! - `api`: Axum router and REST handlers
//! - `utils`: Utility functions (atomic writes, timestamps)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use events_api::api::http::create_router;
//! use events_api::EventStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(EventStore::new());
//!     let app = create_router(store);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod event_store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use event_store::EventStore;
pub use types::{
    Event, EventDocument, EventPatch, NewEvent, StoreError, StoreResult, DEFAULT_LOCATION,
    REQUIRED_FIELDS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
