//! REST API module for HTTP endpoints
//!
//! Provides the JSON contract over the event store:
//! - `GET /api/events` - list with optional `category`/`sort` query params
//! - `GET /api/events/category/:category` - category-scoped listing
//! - `GET /api/events/:id` - single event
//! - `POST /api/events` - create
//! - `PUT /api/events/:id` - partial update
//! - `DELETE /api/events/:id` - delete

pub mod events;

use serde::Serialize;

use crate::types::Event;

/// Body of `GET /api/events`
#[derive(Debug, Serialize)]
pub struct EventList {
    pub count: usize,
    pub events: Vec<Event>,
}

/// Body of `GET /api/events/category/:category`
///
/// Echoes the requested category; an unknown one yields `count: 0`, never a
/// 404.
#[derive(Debug, Serialize)]
pub struct CategoryEventList {
    pub category: String,
    pub count: usize,
    pub events: Vec<Event>,
}

/// Body of a successful mutation: a confirmation plus the affected record
#[derive(Debug, Serialize)]
pub struct MutationReply {
    pub message: &'static str,
    pub event: Event,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
