use anyhow::{Context, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LogFormat;

/// `RUST_LOG` overrides the default `info,tower_http=info` filter.
pub fn init_tracing(format: LogFormat) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
  let registry = tracing_subscriber::registry().with(filter);
  match format {
    LogFormat::Json => registry
      .with(fmt::layer().json().flatten_event(true).with_target(true))
      .init(),
    LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
  }
}

pub fn install_metrics() -> Result<PrometheusHandle> {
  PrometheusBuilder::new()
    .install_recorder()
    .context("Failed to install Prometheus recorder")
}
