//! The incident registry: dedup-key identity, status transitions, stats.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::types::*;

/// In-memory incident store. Holds at most one incident per distinct dedup
/// key; ids come from a counter that only [`Registry::clear`] resets.
#[derive(Debug)]
pub struct Registry {
  incidents: Vec<Incident>,
  next_id: u64,
}

/// Result of ingesting one event.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
  pub incident: Incident,
  /// True when the event created a new incident rather than updating one.
  pub created: bool,
}

impl Registry {
  pub fn new() -> Self {
    Self {
      incidents: Vec::new(),
      next_id: 1,
    }
  }

  /// Ingest one lifecycle event.
  ///
  /// A missing dedup key synthesizes one from the id counter. A known key
  /// moves the existing incident's status and updated_at in place; payload
  /// and routing key keep their first-event values — repeat events never
  /// merge them, matching the upstream API this simulates.
  pub fn ingest(
    &mut self,
    routing_key: String,
    action: &str,
    dedup_key: Option<String>,
    payload: Map<String, Value>,
  ) -> IngestOutcome {
    let dedup_key = dedup_key.unwrap_or_else(|| format!("incident-{}", self.next_id));
    let status = status_for_action(action);
    let now = Utc::now();

    if let Some(existing) = self.incidents.iter_mut().find(|i| i.dedup_key == dedup_key) {
      existing.status = status;
      existing.updated_at = now;
      return IngestOutcome {
        incident: existing.clone(),
        created: false,
      };
    }

    let incident = Incident {
      id: self.next_id,
      dedup_key,
      status,
      payload,
      routing_key,
      created_at: now,
      updated_at: now,
    };
    self.next_id += 1;
    self.incidents.push(incident.clone());
    IngestOutcome {
      incident,
      created: true,
    }
  }

  /// Snapshot of every incident in creation order, plus stats recomputed on
  /// every call (statuses move between calls, so nothing is cached).
  pub fn list(&self) -> IncidentListing {
    IncidentListing {
      total: self.incidents.len(),
      incidents: self.incidents.clone(),
      stats: self.stats(),
    }
  }

  fn stats(&self) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for incident in &self.incidents {
      match incident.status.as_str() {
        STATUS_TRIGGERED => counts.triggered += 1,
        STATUS_ACKNOWLEDGED => counts.acknowledged += 1,
        STATUS_RESOLVED => counts.resolved += 1,
        _ => {}
      }
    }
    counts
  }

  /// Drop every incident and restart ids at 1. Returns the removed count.
  pub fn clear(&mut self) -> usize {
    let removed = self.incidents.len();
    self.incidents.clear();
    self.next_id = 1;
    removed
  }
}

impl Default for Registry {
  fn default() -> Self {
    Self::new()
  }
}

/// Map the canonical lifecycle actions onto their status. Any other action
/// becomes the status verbatim — no transition is ever rejected, the
/// simulated API trusts its caller.
fn status_for_action(action: &str) -> String {
  match action {
    "trigger" => STATUS_TRIGGERED.to_string(),
    "acknowledge" => STATUS_ACKNOWLEDGED.to_string(),
    "resolve" => STATUS_RESOLVED.to_string(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn payload(summary: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("summary".into(), Value::String(summary.into()));
    map
  }

  fn trigger(registry: &mut Registry, key: &str) -> IngestOutcome {
    registry.ingest("rk".into(), "trigger", Some(key.into()), payload("boom"))
  }

  #[test]
  fn first_event_creates_a_triggered_incident() {
    let mut registry = Registry::new();
    let outcome = trigger(&mut registry, "A");

    assert!(outcome.created);
    assert_eq!(outcome.incident.id, 1);
    assert_eq!(outcome.incident.status, STATUS_TRIGGERED);
    assert_eq!(registry.list().total, 1);
  }

  #[test]
  fn repeat_dedup_key_updates_in_place() {
    let mut registry = Registry::new();
    let first = trigger(&mut registry, "A");
    let second = registry.ingest("rk".into(), "acknowledge", Some("A".into()), Map::new());

    assert!(!second.created);
    assert_eq!(second.incident.id, first.incident.id);
    assert_eq!(second.incident.status, STATUS_ACKNOWLEDGED);
    assert_eq!(registry.list().total, 1);
  }

  #[test]
  fn two_keys_give_two_incidents_and_split_stats() {
    let mut registry = Registry::new();
    trigger(&mut registry, "A");
    registry.ingest("rk".into(), "acknowledge", Some("A".into()), Map::new());
    trigger(&mut registry, "B");

    let listing = registry.list();
    assert_eq!(listing.total, 2);
    assert_eq!(
      listing.stats,
      StatusCounts {
        triggered: 1,
        acknowledged: 1,
        resolved: 0,
      }
    );
  }

  #[test]
  fn missing_dedup_key_synthesizes_a_fresh_one_each_time() {
    let mut registry = Registry::new();
    let first = registry.ingest("rk".into(), "trigger", None, Map::new());
    let second = registry.ingest("rk".into(), "trigger", None, Map::new());

    assert!(first.created && second.created);
    assert_eq!(first.incident.dedup_key, "incident-1");
    assert_eq!(second.incident.dedup_key, "incident-2");
    assert_eq!(registry.list().total, 2);
  }

  #[test]
  fn unknown_action_is_stored_verbatim_and_counted_in_no_bucket() {
    let mut registry = Registry::new();
    trigger(&mut registry, "A");
    registry.ingest("rk".into(), "escalate", Some("B".into()), Map::new());

    let listing = registry.list();
    assert_eq!(listing.total, 2);
    assert_eq!(listing.incidents[1].status, "escalate");
    let StatusCounts {
      triggered,
      acknowledged,
      resolved,
    } = listing.stats;
    assert_eq!(triggered + acknowledged + resolved, 1);
  }

  #[test]
  fn stats_are_recomputed_on_every_list_call() {
    let mut registry = Registry::new();
    trigger(&mut registry, "A");
    assert_eq!(registry.list().stats.triggered, 1);

    registry.ingest("rk".into(), "resolve", Some("A".into()), Map::new());
    let stats = registry.list().stats;
    assert_eq!(stats.triggered, 0);
    assert_eq!(stats.resolved, 1);
  }

  #[test]
  fn repeat_event_does_not_merge_payload_or_routing_key() {
    let mut registry = Registry::new();
    registry.ingest("first-rk".into(), "trigger", Some("A".into()), payload("original"));
    registry.ingest("second-rk".into(), "acknowledge", Some("A".into()), payload("replacement"));

    let listing = registry.list();
    let incident = &listing.incidents[0];
    assert_eq!(incident.routing_key, "first-rk");
    assert_eq!(incident.payload.get("summary"), Some(&Value::String("original".into())));
  }

  #[test]
  fn clear_empties_everything_and_restarts_ids() {
    let mut registry = Registry::new();
    trigger(&mut registry, "A");
    trigger(&mut registry, "B");

    assert_eq!(registry.clear(), 2);
    let listing = registry.list();
    assert_eq!(listing.total, 0);
    assert_eq!(listing.stats, StatusCounts::default());

    let outcome = trigger(&mut registry, "C");
    assert_eq!(outcome.incident.id, 1);
  }

  #[test]
  fn clear_on_empty_registry_returns_zero() {
    let mut registry = Registry::new();
    assert_eq!(registry.clear(), 0);
    assert_eq!(trigger(&mut registry, "A").incident.id, 1);
  }
}
