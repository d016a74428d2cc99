//! Event record types

use serde::{Deserialize, Serialize};

/// Fields that must be present and non-empty when creating an event
pub const REQUIRED_FIELDS: &[&str] = &["title", "date", "category"];

/// Sentinel stored when no location is supplied
pub const DEFAULT_LOCATION: &str = "Not specified";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// A single event record
///
/// Field order matters: it is the stable key order of the persisted document.
/// `id`, `createdAt` and `updatedAt` are owned by the store and never taken
/// from client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub category: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// The on-disk document: `{ "events": [...] }`, insertion-ordered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDocument {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Client input for creating an event
///
/// All fields are optional at the type level so the store can report the
/// required set in one validation error instead of failing field-by-field
/// during deserialization. Unknown keys are rejected at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl NewEvent {
    /// True when `title`, `date` and `category` are all present and non-empty
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.date, &self.category]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

/// Partial update for an existing event (shallow merge)
///
/// A patch may carry `id` but it is ignored: the store keeps the original
/// identifier. `createdAt`/`updatedAt` are not patchable and, like any other
/// unknown key, fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventPatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_required_fields() {
        let draft = NewEvent {
            title: Some("Launch".to_string()),
            date: Some("2024-01-01".to_string()),
            category: Some("Tech".to_string()),
            ..Default::default()
        };
        assert!(draft.has_required_fields());
    }

    #[test]
    fn test_empty_required_field_counts_as_missing() {
        let draft = NewEvent {
            title: Some(String::new()),
            date: Some("2024-01-01".to_string()),
            category: Some("Tech".to_string()),
            ..Default::default()
        };
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn test_patch_rejects_unknown_keys() {
        let err = serde_json::from_str::<EventPatch>(r#"{"createdAt":"2020-01-01"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_document_tolerates_missing_optional_fields() {
        let doc: EventDocument = serde_json::from_str(
            r#"{"events":[{"id":1,"title":"T","date":"2024-01-01","category":"Tech"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.events[0].description, "");
        assert_eq!(doc.events[0].location, DEFAULT_LOCATION);
    }
}
