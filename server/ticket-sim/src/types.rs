//! Wire types for the ticket simulator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored ticket. `fields` is whatever the caller sent, verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: String,
  pub fields: Map<String, Value>,
  pub created: DateTime<Utc>,
}

/// Issue creation request (REST API v2 shape). Everything beyond `fields`
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIssueRequest {
  #[serde(default)]
  pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueResponse {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
  #[serde(rename = "startAt")]
  pub start_at: usize,
  #[serde(rename = "maxResults")]
  pub max_results: usize,
  pub total: usize,
  pub issues: Vec<Ticket>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
  pub message: String,
  pub cleared: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
  pub status: &'static str,
  pub service: &'static str,
}
