mod server;

use anyhow::Result;

use crate::server::{config::ServerConfig, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
  let config = ServerConfig::from_env()?;
  telemetry::init_tracing(config.log_format);
  server::serve(config).await
}
