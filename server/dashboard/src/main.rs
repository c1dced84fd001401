//! Binary entrypoint for the dashboard.

use std::net::SocketAddr;
use std::sync::Arc;

use dashboard::{AppState, Services};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "3000".into())
    .parse()
    .expect("PORT must be a valid u16");

  let services = Services::from_env();
  println!(
    "dashboard polling jira={} pagerduty={} slack={}",
    services.jira, services.pagerduty, services.slack
  );

  let state = Arc::new(AppState::new(services));
  let app = dashboard::app(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], port));
  println!("dashboard listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
