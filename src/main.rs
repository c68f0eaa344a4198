//! Kolb LSI · Learning-Style Inventory Backend
//!
//! - Axum HTTP + WebSocket API over the scoring core
//! - Static SPA fallback (<static_dir>/index.html)
//!
//! Important env variables:
//!   PORT              : u16 (default 3000)
//!   KOLB_CONFIG_PATH  : path to TOML config (static dir, session limits, idle TTL)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::info;

use kolb_backend::routes::build_router;
use kolb_backend::state::AppState;
use kolb_backend::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared application state (config + in-memory session store).
  let state = Arc::new(AppState::new());

  // Periodically drop sessions nobody has touched within the idle TTL.
  tokio::spawn(sweep_idle_sessions(state.clone()));

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "kolb_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "kolb_backend", "Server stopped");
  Ok(())
}

async fn sweep_idle_sessions(state: Arc<AppState>) {
  let period = state.config.sessions.idle_ttl().max(Duration::from_secs(1));
  let mut ticker = tokio::time::interval(period);
  loop {
    ticker.tick().await;
    state.evict_idle().await;
  }
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "kolb_backend", error = %e, "Failed to listen for Ctrl-C; running until killed");
    std::future::pending::<()>().await;
  }
}
