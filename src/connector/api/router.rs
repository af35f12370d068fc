use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{chat, health, index};

/// Route table: the chat page, the relay endpoint and liveness.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
