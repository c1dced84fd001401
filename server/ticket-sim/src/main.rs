//! Binary entrypoint for the ticket simulator.

use std::net::SocketAddr;
use std::sync::Arc;

use ticket_sim::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "8080".into())
    .parse()
    .expect("PORT must be a valid u16");

  let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));
  let state = Arc::new(AppState::new(base_url));
  let app = ticket_sim::app(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], port));
  println!("ticket-sim listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
