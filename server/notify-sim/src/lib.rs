//! Notification simulator — a mock Slack-style webhook sink.
//!
//! Captures every posted message in memory, tagged with where it arrived
//! (webhook path or API method) and when, and exposes list/clear over HTTP.

pub mod error;
pub mod handlers;
pub mod inbox;
pub mod state;
pub mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use inbox::Inbox;
pub use state::AppState;

/// Build the HTTP surface over shared state.
pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/services/*path", post(handlers::incoming_webhook))
    .route("/api/chat.postMessage", post(handlers::post_message))
    .route("/messages", get(handlers::list_messages))
    .route("/messages/clear", post(handlers::clear_messages))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
