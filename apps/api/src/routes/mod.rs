pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::relay::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Transcripts grow with the interview, so the chat body is uncapped.
        .route(
            "/api/chat",
            post(handlers::handle_chat).layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}
