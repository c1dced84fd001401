//! Structured error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("malformed message body: {0}")]
  MalformedBody(String),
}

#[derive(Serialize)]
struct ErrorBody {
  ok: bool,
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorBody {
      ok: false,
      error: self.to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
  }
}
