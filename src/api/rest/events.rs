//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{ApiError, CategoryEventList, EventList, MutationReply};
use crate::event_store::EventStore;
use crate::types::{EventPatch, NewEvent, StoreError};

/// Query parameters for listing events
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// Filter by category (case-insensitive)
    pub category: Option<String>,
    /// Sort by field (date, title); anything else keeps insertion order
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_sort() -> String {
    "date".to_string()
}

/// GET /api/events - List events with optional filter and sort
pub async fn list_events(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let events = store.list_events(params.category.as_deref(), &params.sort);

    Json(EventList {
        count: events.len(),
        events,
    })
}

/// GET /api/events/:id - Get single event
pub async fn get_event(State(store): State<Arc<EventStore>>, Path(id): Path<u64>) -> Response {
    match store.get_by_id(id) {
        Ok(event) => Json(event).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/events/category/:category - Category-scoped listing
pub async fn list_by_category(
    State(store): State<Arc<EventStore>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let events = store.list_by_category(&category);

    Json(CategoryEventList {
        category,
        count: events.len(),
        events,
    })
}

/// POST /api/events - Create a new event
pub async fn create_event(
    State(store): State<Arc<EventStore>>,
    Json(draft): Json<NewEvent>,
) -> Response {
    match store.create(draft) {
        Ok(event) => {
            tracing::info!(id = event.id, "event created");
            let reply = MutationReply {
                message: "Event created",
                event,
            };
            (StatusCode::CREATED, Json(reply)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// PUT /api/events/:id - Partially update an event
pub async fn update_event(
    State(store): State<Arc<EventStore>>,
    Path(id): Path<u64>,
    Json(patch): Json<EventPatch>,
) -> Response {
    match store.update(id, patch) {
        Ok(event) => {
            tracing::info!(id = event.id, "event updated");
            let reply = MutationReply {
                message: "Event updated",
                event,
            };
            Json(reply).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// DELETE /api/events/:id - Delete an event, echoing the removed record
pub async fn delete_event(State(store): State<Arc<EventStore>>, Path(id): Path<u64>) -> Response {
    match store.delete(id) {
        Ok(event) => {
            tracing::info!(id = event.id, "event deleted");
            let reply = MutationReply {
                message: "Event deleted",
                event,
            };
            Json(reply).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Map a store error onto status code + JSON body
///
/// Storage failures are logged in full here and surfaced as a generic
/// message: the caller gets the 500, not the diagnostics.
fn error_response(err: StoreError) -> Response {
    match &err {
        StoreError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(err.to_string())),
        )
            .into_response(),
        StoreError::MissingRequired => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request(err.to_string())),
        )
            .into_response(),
        StoreError::Io(_) | StoreError::Json(_) => {
            tracing::error!(%err, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal("Server error")),
            )
                .into_response()
        }
    }
}
