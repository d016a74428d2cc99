//! Error type for store operations

use std::fmt;
use std::io;

use super::event::REQUIRED_FIELDS;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the event store
#[derive(Debug)]
pub enum StoreError {
    /// No event with the requested id exists
    NotFound(u64),
    /// One of the required creation fields is absent or empty
    MissingRequired,
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Event {} not found", id),
            StoreError::MissingRequired => {
                write!(f, "Required fields: {}", REQUIRED_FIELDS.join(", "))
            }
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_names_the_required_set() {
        let msg = StoreError::MissingRequired.to_string();
        assert_eq!(msg, "Required fields: title, date, category");
    }

    #[test]
    fn test_not_found_names_the_id() {
        assert_eq!(StoreError::NotFound(42).to_string(), "Event 42 not found");
    }
}
