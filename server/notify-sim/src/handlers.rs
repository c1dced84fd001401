//! HTTP handlers for the notification simulator.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{ClearResponse, Health, PostAck};

pub async fn health() -> Json<Health> {
  Json(Health {
    status: "healthy",
    service: "notify-sim",
  })
}

pub async fn incoming_webhook(
  State(state): State<Arc<AppState>>,
  Path(path): Path<String>,
  body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<PostAck>, ApiError> {
  let Json(message) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

  let mut inbox = state.inbox();
  inbox.record_webhook(path, message);
  println!("notify-sim: captured webhook message ({} total)", inbox.len());

  Ok(Json(PostAck { ok: true }))
}

pub async fn post_message(
  State(state): State<Arc<AppState>>,
  body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<PostAck>, ApiError> {
  let Json(message) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

  let mut inbox = state.inbox();
  inbox.record_api_call("chat.postMessage", message);
  println!("notify-sim: captured API message ({} total)", inbox.len());

  Ok(Json(PostAck { ok: true }))
}

/// Bare-array listing; the dashboard accepts this shape as-is.
pub async fn list_messages(State(state): State<Arc<AppState>>) -> Json<Vec<Map<String, Value>>> {
  Json(state.inbox().all().to_vec())
}

pub async fn clear_messages(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
  let cleared = state.inbox().clear();
  println!("notify-sim: cleared {} messages", cleared);

  Json(ClearResponse {
    message: format!("Cleared {} messages", cleared),
    cleared,
  })
}
