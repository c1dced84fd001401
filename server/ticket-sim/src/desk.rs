//! The ticket desk: key allocation and in-memory ticket storage.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::types::Ticket;

/// Ticket numbering starts in Jira territory rather than at 1.
const FIRST_TICKET_NUMBER: u64 = 1000;

const DEFAULT_PROJECT: &str = "AGENT";

/// In-memory ticket store with a per-process number sequence.
#[derive(Debug)]
pub struct TicketDesk {
  base_url: String,
  tickets: Vec<Ticket>,
  next_number: u64,
}

impl TicketDesk {
  /// `base_url` is used to build each ticket's `self` link.
  pub fn new(base_url: String) -> Self {
    Self {
      base_url,
      tickets: Vec::new(),
      next_number: FIRST_TICKET_NUMBER,
    }
  }

  /// Create a ticket from Jira-shaped `fields`, allocating the next key in
  /// the sequence. The project prefix comes from `fields.project.key`.
  pub fn create(&mut self, fields: Map<String, Value>) -> Ticket {
    let project = fields
      .get("project")
      .and_then(|p| p.get("key"))
      .and_then(Value::as_str)
      .unwrap_or(DEFAULT_PROJECT);

    let number = self.next_number;
    self.next_number += 1;

    let key = format!("{}-{}", project, number);
    let ticket = Ticket {
      id: number.to_string(),
      self_url: format!("{}/rest/api/2/issue/{}", self.base_url, key),
      key,
      fields,
      created: Utc::now(),
    };
    self.tickets.push(ticket.clone());
    ticket
  }

  pub fn get(&self, key: &str) -> Option<&Ticket> {
    self.tickets.iter().find(|t| t.key == key)
  }

  pub fn all(&self) -> &[Ticket] {
    &self.tickets
  }

  pub fn len(&self) -> usize {
    self.tickets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tickets.is_empty()
  }

  /// Drop every ticket and restart the number sequence. Returns the removed
  /// count.
  pub fn clear(&mut self) -> usize {
    let removed = self.tickets.len();
    self.tickets.clear();
    self.next_number = FIRST_TICKET_NUMBER;
    removed
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fields(project: Option<&str>, summary: &str) -> Map<String, Value> {
    let mut map = Map::new();
    if let Some(project) = project {
      map.insert(
        "project".into(),
        serde_json::json!({ "key": project }),
      );
    }
    map.insert("summary".into(), Value::String(summary.into()));
    map
  }

  #[test]
  fn keys_are_sequential_within_the_project_prefix() {
    let mut desk = TicketDesk::new("http://localhost:8080".into());
    let first = desk.create(fields(Some("OPS"), "disk full"));
    let second = desk.create(fields(Some("OPS"), "disk still full"));

    assert_eq!(first.key, "OPS-1000");
    assert_eq!(second.key, "OPS-1001");
    assert_eq!(desk.len(), 2);
  }

  #[test]
  fn missing_project_falls_back_to_default() {
    let mut desk = TicketDesk::new("http://localhost:8080".into());
    let ticket = desk.create(fields(None, "no project"));
    assert_eq!(ticket.key, "AGENT-1000");
  }

  #[test]
  fn lookup_is_by_full_key() {
    let mut desk = TicketDesk::new("http://localhost:8080".into());
    let ticket = desk.create(fields(Some("OPS"), "boom"));

    assert!(desk.get(&ticket.key).is_some());
    assert!(desk.get("OPS-9999").is_none());
  }

  #[test]
  fn self_link_points_at_the_issue_route() {
    let mut desk = TicketDesk::new("http://localhost:8080".into());
    let ticket = desk.create(fields(Some("OPS"), "boom"));
    assert_eq!(ticket.self_url, "http://localhost:8080/rest/api/2/issue/OPS-1000");
  }

  #[test]
  fn clear_resets_the_number_sequence() {
    let mut desk = TicketDesk::new("http://localhost:8080".into());
    desk.create(fields(Some("OPS"), "one"));
    desk.create(fields(Some("OPS"), "two"));

    assert_eq!(desk.clear(), 2);
    assert!(desk.is_empty());
    assert_eq!(desk.create(fields(Some("OPS"), "three")).key, "OPS-1000");
  }
}
