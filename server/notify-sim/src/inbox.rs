//! The message inbox: verbatim capture of posted notifications.

use chrono::Utc;
use serde_json::{Map, Value};

/// Captured messages are plain JSON objects: receipt metadata first, then
/// the caller's fields flattened in. Caller fields win on key collisions.
#[derive(Debug, Default)]
pub struct Inbox {
  messages: Vec<Map<String, Value>>,
}

impl Inbox {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a message posted to an incoming-webhook path.
  pub fn record_webhook(&mut self, path: String, body: Map<String, Value>) -> Map<String, Value> {
    let mut message = Map::new();
    message.insert("webhook_path".into(), Value::String(path));
    self.record(message, body)
  }

  /// Record a message posted through a Web API method.
  pub fn record_api_call(&mut self, api: &str, body: Map<String, Value>) -> Map<String, Value> {
    let mut message = Map::new();
    message.insert("api".into(), Value::String(api.into()));
    self.record(message, body)
  }

  fn record(&mut self, mut message: Map<String, Value>, body: Map<String, Value>) -> Map<String, Value> {
    message.insert("timestamp".into(), Value::String(Utc::now().to_rfc3339()));
    message.extend(body);
    self.messages.push(message.clone());
    message
  }

  pub fn all(&self) -> &[Map<String, Value>] {
    &self.messages
  }

  pub fn len(&self) -> usize {
    self.messages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.messages.is_empty()
  }

  /// Drop every captured message. Returns the removed count.
  pub fn clear(&mut self) -> usize {
    let removed = self.messages.len();
    self.messages.clear();
    removed
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn body(text: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("text".into(), Value::String(text.into()));
    map.insert("channel".into(), Value::String("#alerts".into()));
    map
  }

  #[test]
  fn webhook_messages_carry_their_path_and_fields() {
    let mut inbox = Inbox::new();
    let message = inbox.record_webhook("T000/B000/incoming-webhook".into(), body("db down"));

    assert_eq!(message["webhook_path"], "T000/B000/incoming-webhook");
    assert_eq!(message["text"], "db down");
    assert_eq!(message["channel"], "#alerts");
    assert!(message["timestamp"].is_string());
    assert_eq!(inbox.len(), 1);
  }

  #[test]
  fn api_messages_are_tagged_with_the_method() {
    let mut inbox = Inbox::new();
    let message = inbox.record_api_call("chat.postMessage", body("all clear"));

    assert_eq!(message["api"], "chat.postMessage");
    assert!(message.get("webhook_path").is_none());
  }

  #[test]
  fn caller_fields_win_on_key_collision() {
    let mut inbox = Inbox::new();
    let mut colliding = body("x");
    colliding.insert("timestamp".into(), Value::String("caller-supplied".into()));

    let message = inbox.record_webhook("T000/B000/incoming-webhook".into(), colliding);
    assert_eq!(message["timestamp"], "caller-supplied");
  }

  #[test]
  fn clear_empties_the_inbox() {
    let mut inbox = Inbox::new();
    inbox.record_webhook("a".into(), body("one"));
    inbox.record_webhook("b".into(), body("two"));

    assert_eq!(inbox.clear(), 2);
    assert!(inbox.is_empty());
    assert_eq!(inbox.clear(), 0);
  }
}
