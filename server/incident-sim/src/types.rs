//! Wire types and internal models for the incident simulator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the alerting pipeline sends)
// ---------------------------------------------------------------------------

/// Events API v2 envelope. Unknown fields are silently ignored; missing
/// fields fall back to the same defaults the real API tolerates.
#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueRequest {
  #[serde(default = "default_routing_key")]
  pub routing_key: String,
  #[serde(default)]
  pub event: EventBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventBody {
  /// Lifecycle action. Canonical values are `trigger`, `acknowledge` and
  /// `resolve`; any other string is accepted and carried through verbatim.
  #[serde(default = "default_action")]
  pub event_action: String,
  #[serde(default)]
  pub dedup_key: Option<String>,
  /// Opaque caller fields (severity, summary, source, custom_details, ...).
  /// Stored as-is, never interpreted.
  #[serde(default)]
  pub payload: Map<String, Value>,
}

impl Default for EventBody {
  fn default() -> Self {
    Self {
      event_action: default_action(),
      dedup_key: None,
      payload: Map::new(),
    }
  }
}

fn default_routing_key() -> String {
  "unknown".to_string()
}

fn default_action() -> String {
  "trigger".to_string()
}

// ---------------------------------------------------------------------------
// Incident state
// ---------------------------------------------------------------------------

/// Canonical status values. `Incident::status` stays an open string so that
/// unknown actions show up in listings untouched; only these three feed the
/// stat buckets.
pub const STATUS_TRIGGERED: &str = "triggered";
pub const STATUS_ACKNOWLEDGED: &str = "acknowledged";
pub const STATUS_RESOLVED: &str = "resolved";

/// One tracked incident.
#[derive(Debug, Clone, Serialize)]
pub struct Incident {
  /// Monotonically increasing, never reused until a clear resets the counter.
  pub id: u64,
  pub dedup_key: String,
  pub status: String,
  pub payload: Map<String, Value>,
  pub routing_key: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Outbound types (JSON contract — what we respond with)
// ---------------------------------------------------------------------------

/// Counts over the three canonical statuses. Incidents holding any other
/// status appear in listings but in none of these buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
  pub triggered: usize,
  pub acknowledged: usize,
  pub resolved: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentListing {
  pub total: usize,
  pub incidents: Vec<Incident>,
  pub stats: StatusCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnqueueAck {
  pub status: &'static str,
  pub message: &'static str,
  pub dedup_key: String,
}

/// Generic acknowledgement for endpoints that store nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
  pub status: &'static str,
  pub message: &'static str,
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
