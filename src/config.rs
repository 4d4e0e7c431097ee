//! Loading server configuration from TOML, with env overrides.
//!
//! Schema (all keys optional):
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 5000
//! static_dir = "./static"
//! cors_allow_any = true
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;
use tracing::{error, info, warn};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
  pub host: IpAddr,
  pub port: u16,
  /// Directory holding the front-end page; served as the router fallback.
  pub static_dir: String,
  /// Permissive CORS (any origin/method/header). Turn off behind a same-origin proxy.
  pub cors_allow_any: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
      port: 5000,
      static_dir: "./static".into(),
      cors_allow_any: true,
    }
  }
}

impl AppConfig {
  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }

  /// Parse a TOML document. Unknown keys are ignored, missing keys take defaults.
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Config from QUIZ_CONFIG_PATH (if set and readable) with PORT applied on top.
  pub fn from_env() -> Self {
    let mut cfg = load_config_file_from_env().unwrap_or_default();
    cfg.apply_port_override(std::env::var("PORT").ok().as_deref());
    cfg
  }

  /// Apply a raw PORT value. Unparseable values are logged and ignored.
  pub fn apply_port_override(&mut self, raw: Option<&str>) {
    let Some(raw) = raw else { return };
    match raw.trim().parse::<u16>() {
      Ok(port) => self.port = port,
      Err(e) => warn!(target: "albhed_quiz", %raw, error = %e, "Ignoring invalid PORT"),
    }
  }
}

/// Attempt to load `AppConfig` from QUIZ_CONFIG_PATH. On any parsing/IO error, returns None.
fn load_config_file_from_env() -> Option<AppConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match AppConfig::from_toml_str(&s) {
      Ok(cfg) => {
        info!(target: "albhed_quiz", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "albhed_quiz", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "albhed_quiz", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
