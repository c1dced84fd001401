//! Polling and merging of sibling simulator state.
//!
//! Each sibling is polled independently. A timeout, refused connection,
//! non-2xx status or unparseable body degrades that single entry to
//! "unavailable" with zero counts; the other entries are unaffected.

use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// Healthy entries keep at most this many most-recent-first items.
const MAX_ITEMS: usize = 10;

pub const UNAVAILABLE: &str = "Service unavailable";

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
  pub jira: TicketEntry,
  pub pagerduty: IncidentEntry,
  pub slack: MessageEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketEntry {
  pub total: usize,
  pub tickets: Vec<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentEntry {
  pub total: u64,
  pub incidents: Vec<Value>,
  /// The sibling's own status buckets, passed through untouched.
  pub stats: Value,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageEntry {
  pub total: usize,
  pub messages: Vec<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl TicketEntry {
  fn unavailable() -> Self {
    Self {
      total: 0,
      tickets: Vec::new(),
      error: Some(UNAVAILABLE.into()),
    }
  }
}

impl IncidentEntry {
  fn unavailable() -> Self {
    Self {
      total: 0,
      incidents: Vec::new(),
      stats: zero_counts(),
      error: Some(UNAVAILABLE.into()),
    }
  }
}

impl MessageEntry {
  fn unavailable() -> Self {
    Self {
      total: 0,
      messages: Vec::new(),
      error: Some(UNAVAILABLE.into()),
    }
  }
}

fn zero_counts() -> Value {
  json!({ "triggered": 0, "acknowledged": 0, "resolved": 0 })
}

/// Poll every sibling concurrently and merge the results.
pub async fn collect(state: &AppState) -> DashboardStats {
  let (jira, pagerduty, slack) = tokio::join!(
    fetch_tickets(state),
    fetch_incidents(state),
    fetch_messages(state),
  );
  DashboardStats {
    jira,
    pagerduty,
    slack,
  }
}

async fn fetch_json(client: &Client, url: &str) -> Result<Value, reqwest::Error> {
  client
    .get(url)
    .send()
    .await?
    .error_for_status()?
    .json::<Value>()
    .await
}

/// Tickets arrive either as a bare array or wrapped in `{total, tickets}`.
async fn fetch_tickets(state: &AppState) -> TicketEntry {
  let url = format!("{}/tickets", state.services.jira);
  match fetch_json(&state.client, &url).await {
    Ok(Value::Array(tickets)) => TicketEntry {
      total: tickets.len(),
      tickets: truncate(tickets),
      error: None,
    },
    Ok(Value::Object(body)) => TicketEntry {
      total: body.get("total").and_then(Value::as_u64).unwrap_or(0) as usize,
      tickets: body
        .get("tickets")
        .and_then(Value::as_array)
        .cloned()
        .map(truncate)
        .unwrap_or_default(),
      error: None,
    },
    Ok(_) => TicketEntry::unavailable(),
    Err(e) => {
      eprintln!("dashboard: jira poll failed: {}", e);
      TicketEntry::unavailable()
    }
  }
}

async fn fetch_incidents(state: &AppState) -> IncidentEntry {
  let url = format!("{}/incidents", state.services.pagerduty);
  match fetch_json(&state.client, &url).await {
    Ok(body) => IncidentEntry {
      total: body.get("total").and_then(Value::as_u64).unwrap_or(0),
      incidents: body
        .get("incidents")
        .and_then(Value::as_array)
        .cloned()
        .map(truncate)
        .unwrap_or_default(),
      stats: body.get("stats").cloned().unwrap_or_else(zero_counts),
      error: None,
    },
    Err(e) => {
      eprintln!("dashboard: pagerduty poll failed: {}", e);
      IncidentEntry::unavailable()
    }
  }
}

/// Messages arrive either as a bare array or wrapped in `{total, messages}`.
async fn fetch_messages(state: &AppState) -> MessageEntry {
  let url = format!("{}/messages", state.services.slack);
  match fetch_json(&state.client, &url).await {
    Ok(Value::Array(messages)) => MessageEntry {
      total: messages.len(),
      messages: truncate(messages),
      error: None,
    },
    Ok(Value::Object(body)) => MessageEntry {
      total: body.get("total").and_then(Value::as_u64).unwrap_or(0) as usize,
      messages: body
        .get("messages")
        .and_then(Value::as_array)
        .cloned()
        .map(truncate)
        .unwrap_or_default(),
      error: None,
    },
    Ok(_) => MessageEntry::unavailable(),
    Err(e) => {
      eprintln!("dashboard: slack poll failed: {}", e);
      MessageEntry::unavailable()
    }
  }
}

fn truncate(mut items: Vec<Value>) -> Vec<Value> {
  items.truncate(MAX_ITEMS);
  items
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unavailable_entries_carry_zero_counts_and_the_marker() {
    let entry = IncidentEntry::unavailable();
    assert_eq!(entry.total, 0);
    assert!(entry.incidents.is_empty());
    assert_eq!(entry.stats["triggered"], 0);
    assert_eq!(entry.error.as_deref(), Some(UNAVAILABLE));

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["error"], UNAVAILABLE);
  }

  #[test]
  fn healthy_entries_omit_the_error_field() {
    let entry = TicketEntry {
      total: 1,
      tickets: vec![json!({"key": "OPS-1000"})],
      error: None,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert!(json.get("error").is_none());
  }

  #[test]
  fn truncate_keeps_the_first_ten() {
    let items: Vec<Value> = (0..25).map(|i| json!(i)).collect();
    let kept = truncate(items);
    assert_eq!(kept.len(), 10);
    assert_eq!(kept[0], 0);
    assert_eq!(kept[9], 9);
  }
}
