//! HTTP handlers for the ticket simulator.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
  ClearResponse, CreateIssueRequest, CreateIssueResponse, Health, SearchResponse, Ticket,
};

pub async fn health() -> Json<Health> {
  Json(Health {
    status: "healthy",
    service: "ticket-sim",
  })
}

pub async fn create_issue(
  State(state): State<Arc<AppState>>,
  body: Result<Json<CreateIssueRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateIssueResponse>), ApiError> {
  let Json(request) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

  let ticket = state.desk().create(request.fields);
  println!("ticket-sim: created ticket {}", ticket.key);

  Ok((
    StatusCode::CREATED,
    Json(CreateIssueResponse {
      id: ticket.id,
      key: ticket.key,
      self_url: ticket.self_url,
    }),
  ))
}

pub async fn get_issue(
  State(state): State<Arc<AppState>>,
  Path(key): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
  state
    .desk()
    .get(&key)
    .cloned()
    .map(Json)
    .ok_or(ApiError::IssueNotFound)
}

pub async fn search_issues(State(state): State<Arc<AppState>>) -> Json<SearchResponse> {
  let desk = state.desk();
  let issues = desk.all().to_vec();
  Json(SearchResponse {
    start_at: 0,
    max_results: issues.len(),
    total: issues.len(),
    issues,
  })
}

/// Bare-array listing; the dashboard accepts this shape as-is.
pub async fn list_tickets(State(state): State<Arc<AppState>>) -> Json<Vec<Ticket>> {
  Json(state.desk().all().to_vec())
}

pub async fn clear_tickets(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
  let cleared = state.desk().clear();
  println!("ticket-sim: cleared {} tickets", cleared);

  Json(ClearResponse {
    message: format!("Cleared {} tickets", cleared),
    cleared,
  })
}
