//! Incident simulator — a mock PagerDuty-style incident backend.
//!
//! Owns an in-memory registry of incidents keyed by dedup_key and exposes it
//! over a small HTTP surface: ingest lifecycle events, list incidents with
//! aggregate stats, clear everything.
//!
//! No DB, no auth, no persistence; state lives for the process lifetime.

pub mod error;
pub mod handlers;
pub mod registry;
pub mod state;
pub mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use registry::{IngestOutcome, Registry};
pub use state::AppState;

/// Build the HTTP surface over shared state.
pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/v2/enqueue", post(handlers::enqueue_event))
    .route("/v2/change/enqueue", post(handlers::enqueue_change))
    .route("/incidents", get(handlers::list_incidents))
    .route("/incidents/clear", post(handlers::clear_incidents))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
