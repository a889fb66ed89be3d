//! HTTP layer for the blog list service.
//!
//! Exposes the blog collection and its statistics as a small REST API:
//! CRUD under `/api/blogs`, the aggregated summary under `/api/stats` and a
//! `/health` probe.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

use routes::{blog_item_routes, blog_routes, get_stats, health};
use state::SharedState;

/// Build the full application router.
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/blogs", blog_routes())
        .route("/api/blogs/{id}", blog_item_routes())
        .route("/api/stats", get(get_stats))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Bind `0.0.0.0:port` and serve the API until Ctrl+C or SIGTERM.
pub async fn serve(state: SharedState, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => tracing::warn!("Failed to install signal handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
