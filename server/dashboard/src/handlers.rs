//! HTTP handlers for the dashboard.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::aggregate::{self, DashboardStats};
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
  pub status: &'static str,
  pub service: &'static str,
}

pub async fn health() -> Json<Health> {
  Json(Health {
    status: "healthy",
    service: "dashboard",
  })
}

/// Aggregate view over all siblings. Always 200; dead siblings show up as
/// degraded entries, never as a failed response.
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
  Json(aggregate::collect(&state).await)
}

/// Proxy a clear request to one sibling.
pub async fn clear_service(
  State(state): State<Arc<AppState>>,
  Path(service): Path<String>,
) -> Response {
  let Some(endpoint) = state.services.clear_endpoint(&service) else {
    return (StatusCode::NOT_FOUND, Json(json!({ "error": "Unknown service" }))).into_response();
  };

  match state.client.post(&endpoint).send().await {
    Ok(resp) if resp.status().is_success() => Json(json!({ "success": true })).into_response(),
    Ok(resp) => {
      eprintln!("dashboard: clear {} returned {}", service, resp.status());
      (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Clear failed" }))).into_response()
    }
    Err(e) => {
      eprintln!("dashboard: clear {} failed: {}", service, e);
      (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() }))).into_response()
    }
  }
}
