pub mod config;
mod http;
pub mod telemetry;

use anyhow::{Context, Result};
use tracing::{error, info};

use self::config::ServerConfig;

pub async fn serve(config: ServerConfig) -> Result<()> {
  let metrics = telemetry::install_metrics()?;
  let app = http::router(http::AppState::new(config.pkg_dir.clone(), metrics));
  info!(
    addr = %config.bind_addr,
    pkg_dir = %config.pkg_dir.display(),
    "Serving user directory"
  );
  axum::Server::try_bind(&config.bind_addr)
    .with_context(|| format!("Failed to bind {}", config.bind_addr))?
    .serve(app.into_make_service())
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!("Server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    error!(%err, "Failed to listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
  info!("Shutdown requested");
}
