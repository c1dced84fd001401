//! Structured error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Adapter-level failures. The registry itself has no fatal errors; the one
/// failure mode is a request body we cannot accept, and that is rejected
/// before any state is touched.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("malformed event body: {0}")]
  MalformedBody(String),
}

#[derive(Serialize)]
struct ErrorBody {
  status: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorBody {
      status: "error",
      message: self.to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
  }
}
