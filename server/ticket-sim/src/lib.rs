//! Ticket simulator — a mock Jira-style ticket backend.
//!
//! Stores created issues in memory with sequential per-process ticket keys
//! and exposes create/fetch/search/list/clear over HTTP.

pub mod desk;
pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use desk::TicketDesk;
pub use error::ApiError;
pub use state::AppState;

/// Build the HTTP surface over shared state.
pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/rest/api/2/issue", post(handlers::create_issue))
    .route("/rest/api/2/issue/:key", get(handlers::get_issue))
    .route("/rest/api/2/search", get(handlers::search_issues).post(handlers::search_issues))
    .route("/tickets", get(handlers::list_tickets))
    .route("/tickets/clear", post(handlers::clear_tickets))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
