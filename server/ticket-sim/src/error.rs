//! Structured error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("malformed issue body: {0}")]
  MalformedBody(String),

  #[error("Issue not found")]
  IssueNotFound,
}

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match self {
      Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
      Self::IssueNotFound => StatusCode::NOT_FOUND,
    };
    let body = ErrorBody {
      error: self.to_string(),
    };
    (status, Json(body)).into_response()
  }
}
