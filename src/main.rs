//! Al Bhed quiz backend
//!
//! - Axum HTTP + WebSocket API
//! - Static front-end fallback (`static_dir`, default ./static)
//!
//! Important env variables:
//!   PORT              : u16, overrides the configured port (default 5000)
//!   QUIZ_CONFIG_PATH  : path to TOML config (host, port, static_dir, cors_allow_any)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use albhed_quiz::config::AppConfig;
use albhed_quiz::routes::build_router;
use albhed_quiz::state::AppState;
use albhed_quiz::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let config = AppConfig::from_env();
  let addr = config.socket_addr();

  // A malformed cipher table stops the process here, before anything listens.
  let state = Arc::new(AppState::new(config)?);

  let app = build_router(state);

  let listener = TcpListener::bind(addr).await?;
  info!(target: "albhed_quiz", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "albhed_quiz", error = %e, "Failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  info!(target: "albhed_quiz", "Shutdown signal received");
}
