//! API route configuration.

use crate::api::handlers::{health_handler, visited_domains_handler, visited_links_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /visited_links`   - Record the domains of a batch of raw links
/// - `GET  /visited_domains` - List domains recorded in a `[from, to]` window
/// - `GET  /health`          - Store connectivity check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/visited_links", post(visited_links_handler))
        .route("/visited_domains", get(visited_domains_handler))
        .route("/health", get(health_handler))
}
