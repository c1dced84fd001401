//! Wire types for the notification simulator.

use serde::Serialize;

/// Slack-shaped acknowledgement for accepted posts.
#[derive(Debug, Clone, Serialize)]
pub struct PostAck {
  pub ok: bool,
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
