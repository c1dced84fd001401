//! HTTP handlers for the incident simulator.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{Ack, ClearResponse, EnqueueAck, EnqueueRequest, Health, IncidentListing};

pub async fn health() -> Json<Health> {
  Json(Health {
    status: "healthy",
    service: "incident-sim",
  })
}

/// Events API v2 ingest. The body is validated before the lock is taken, so
/// a rejected request never changes registry state.
pub async fn enqueue_event(
  State(state): State<Arc<AppState>>,
  body: Result<Json<EnqueueRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EnqueueAck>), ApiError> {
  let Json(request) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

  let outcome = state.registry().ingest(
    request.routing_key,
    &request.event.event_action,
    request.event.dedup_key,
    request.event.payload,
  );

  println!(
    "incident-sim: {} incident #{} ({} -> {})",
    if outcome.created { "created" } else { "updated" },
    outcome.incident.id,
    outcome.incident.dedup_key,
    outcome.incident.status
  );

  Ok((
    StatusCode::ACCEPTED,
    Json(EnqueueAck {
      status: "success",
      message: "Event processed",
      dedup_key: outcome.incident.dedup_key,
    }),
  ))
}

/// Change events are acknowledged but not tracked.
pub async fn enqueue_change(
  body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
  let Json(change) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
  println!("incident-sim: change event: {}", change);

  Ok((
    StatusCode::ACCEPTED,
    Json(Ack {
      status: "success",
      message: "Change event processed",
    }),
  ))
}

pub async fn list_incidents(State(state): State<Arc<AppState>>) -> Json<IncidentListing> {
  Json(state.registry().list())
}

pub async fn clear_incidents(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
  let cleared = state.registry().clear();
  println!("incident-sim: cleared {} incidents", cleared);

  Json(ClearResponse {
    message: format!("Cleared {} incidents", cleared),
    cleared,
  })
}
