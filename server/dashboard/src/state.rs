//! Shared state: sibling endpoints and the polling client.

use reqwest::Client;
use std::time::Duration;

/// Per-call budget for sibling polls. A slow sibling costs at most this
/// much and never stalls the other entries.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(2);

/// Base URLs of the sibling simulators.
#[derive(Debug, Clone)]
pub struct Services {
  pub jira: String,
  pub pagerduty: String,
  pub slack: String,
}

impl Services {
  /// Resolve from the environment, defaulting to the compose-network
  /// hostnames the simulators run under.
  pub fn from_env() -> Self {
    Self {
      jira: std::env::var("JIRA_URL").unwrap_or_else(|_| "http://ticket-sim:8080".into()),
      pagerduty: std::env::var("PAGERDUTY_URL").unwrap_or_else(|_| "http://incident-sim:8081".into()),
      slack: std::env::var("SLACK_URL").unwrap_or_else(|_| "http://notify-sim:8082".into()),
    }
  }

  /// The sibling clear endpoint for a service name, if the name is known.
  pub fn clear_endpoint(&self, service: &str) -> Option<String> {
    match service {
      "jira" => Some(format!("{}/tickets/clear", self.jira)),
      "pagerduty" => Some(format!("{}/incidents/clear", self.pagerduty)),
      "slack" => Some(format!("{}/messages/clear", self.slack)),
      _ => None,
    }
  }
}

pub struct AppState {
  pub client: Client,
  pub services: Services,
}

impl AppState {
  pub fn new(services: Services) -> Self {
    let client = Client::builder()
      .timeout(POLL_TIMEOUT)
      .build()
      .expect("failed to build HTTP client");
    Self { client, services }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn services() -> Services {
    Services {
      jira: "http://ticket-sim:8080".into(),
      pagerduty: "http://incident-sim:8081".into(),
      slack: "http://notify-sim:8082".into(),
    }
  }

  #[test]
  fn clear_endpoints_map_per_service() {
    let services = services();
    assert_eq!(
      services.clear_endpoint("jira").as_deref(),
      Some("http://ticket-sim:8080/tickets/clear")
    );
    assert_eq!(
      services.clear_endpoint("pagerduty").as_deref(),
      Some("http://incident-sim:8081/incidents/clear")
    );
    assert_eq!(
      services.clear_endpoint("slack").as_deref(),
      Some("http://notify-sim:8082/messages/clear")
    );
  }

  #[test]
  fn unknown_service_has_no_clear_endpoint() {
    assert!(services().clear_endpoint("opsgenie").is_none());
  }
}
