//! Events API Server - Binary Entry Point

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use events_api::api::http::create_router;
use events_api::types::StoreResult;
use events_api::utils::atomic::cleanup_temp_files;
use events_api::EventStore;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> StoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(EventStore::new());

    // Sweep .tmp leftovers from writes interrupted by a previous crash
    if let Some(data_dir) = store.file_path().parent() {
        let cleaned = cleanup_temp_files(data_dir)?;
        if cleaned > 0 {
            tracing::info!(cleaned, "removed stale temp files");
        }
    }

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let app = create_router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "events-server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
