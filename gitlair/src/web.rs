//! HTTP front end serving the bump list page.

use crate::templates::PageRenderer;
use crate::tracker::BumpTracker;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Shared state of the web front end.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<BumpTracker>,
    renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Creates the state from a tracker and a page renderer.
    pub fn new(tracker: BumpTracker, renderer: PageRenderer) -> Self {
        Self {
            tracker: Arc::new(tracker),
            renderer: Arc::new(renderer),
        }
    }
}

/// Builds the router: `GET /` renders the page, `GET /health` reports liveness.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serves the router on `listener` until the process stops.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, router(state)).await
}

async fn index(State(state): State<AppState>) -> Response {
    let report = match state.tracker.run().await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Failed to collect bumps");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    match state
        .renderer
        .render_index(&state.tracker.settings().owner, &report)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "gitlair",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
