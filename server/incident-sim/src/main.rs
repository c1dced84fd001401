//! Binary entrypoint for the incident simulator.

use std::net::SocketAddr;
use std::sync::Arc;

use incident_sim::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "8081".into())
    .parse()
    .expect("PORT must be a valid u16");

  let state = Arc::new(AppState::new());
  let app = incident_sim::app(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], port));
  println!("incident-sim listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
