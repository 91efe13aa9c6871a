use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{bail, Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PKG_DIR: &str = "pkg";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
  pub bind_addr: SocketAddr,
  /// Output directory of `wasm-pack build --target web`.
  pub pkg_dir: PathBuf,
  pub log_format: LogFormat,
}

impl ServerConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_vars(|key| env::var(key).ok())
  }

  fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind_addr
      .parse()
      .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;
    let pkg_dir = var("PKG_DIR").unwrap_or_else(|| DEFAULT_PKG_DIR.to_string()).into();
    let log_format = match var("LOG_FORMAT").as_deref() {
      None | Some("") | Some("pretty") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => bail!("LOG_FORMAT must be `json` or `pretty`, got `{other}`"),
    };
    Ok(ServerConfig {
      bind_addr,
      pkg_dir,
      log_format,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(key, value)| (key.to_string(), value.to_string()))
      .collect();
    ServerConfig::from_vars(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
    assert_eq!(config.pkg_dir, PathBuf::from(DEFAULT_PKG_DIR));
    assert_eq!(config.log_format, LogFormat::Pretty);
  }

  #[test]
  fn overrides() {
    let config = config(&[
      ("BIND_ADDR", "0.0.0.0:8080"),
      ("PKG_DIR", "/srv/users/pkg"),
      ("LOG_FORMAT", "json"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.pkg_dir, PathBuf::from("/srv/users/pkg"));
    assert_eq!(config.log_format, LogFormat::Json);
  }

  #[test]
  fn rejects_bad_values() {
    assert!(config(&[("BIND_ADDR", "localhost")]).is_err());
    assert!(config(&[("LOG_FORMAT", "xml")]).is_err());
  }
}
