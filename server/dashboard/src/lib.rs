//! Simulator dashboard — aggregates the sibling mock backends.
//!
//! Polls ticket-sim, incident-sim and notify-sim with a short per-call
//! budget and merges their state into one payload. Each sibling degrades
//! independently; the aggregate response always succeeds.

pub mod aggregate;
pub mod handlers;
pub mod state;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use aggregate::DashboardStats;
pub use state::{AppState, Services};

/// Build the HTTP surface over shared state.
pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/api/stats", get(handlers::stats))
    .route("/api/clear/:service", post(handlers::clear_service))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
