//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{events, ApiError};
use crate::event_store::EventStore;

/// Create the Axum router with all endpoints
pub fn create_router(store: Arc<EventStore>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/category/:category",
            get(events::list_by_category),
        )
        .route(
            "/api/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .fallback(route_not_found)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// JSON 404 for anything outside the route table
async fn route_not_found(uri: Uri) -> impl IntoResponse {
    let error = ApiError::not_found(format!("Route not found: {}", uri.path()));
    (StatusCode::NOT_FOUND, Json(error))
}

/// Log method, path and response status for every request
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(%method, %uri, status = response.status().as_u16(), "request");
    response
}
