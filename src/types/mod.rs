//! Data types for the events API
//!
//! This module contains the record model, the client input structs and the
//! store error type used throughout the application.

mod error;
mod event;

pub use error::{StoreError, StoreResult};
pub use event::{Event, EventDocument, EventPatch, NewEvent, DEFAULT_LOCATION, REQUIRED_FIELDS};
