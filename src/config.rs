//! Loading server configuration from TOML.
//!
//! See `AppConfig` for the expected schema. Every key is optional:
//!
//! ```toml
//! static_dir = "./static"
//!
//! [sessions]
//! max_sessions = 1024
//! idle_ttl_secs = 1800
//! ```

use std::time::Duration;
use serde::Deserialize;
use tracing::{info, error};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
  /// Directory holding the questionnaire frontend (served with SPA fallback).
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
  #[serde(default)]
  pub sessions: SessionsCfg,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self { static_dir: default_static_dir(), sessions: SessionsCfg::default() }
  }
}

/// Limits for the in-memory session store.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SessionsCfg {
  #[serde(default = "default_max_sessions")]
  pub max_sessions: usize,
  /// Sessions untouched for longer than this are dropped.
  #[serde(default = "default_idle_ttl_secs")]
  pub idle_ttl_secs: u64,
}

impl SessionsCfg {
  pub fn idle_ttl(&self) -> Duration {
    Duration::from_secs(self.idle_ttl_secs)
  }
}

impl Default for SessionsCfg {
  fn default() -> Self {
    Self { max_sessions: default_max_sessions(), idle_ttl_secs: default_idle_ttl_secs() }
  }
}

fn default_static_dir() -> String { "./static".into() }
fn default_max_sessions() -> usize { 1024 }
fn default_idle_ttl_secs() -> u64 { 30 * 60 }

pub fn parse_app_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str::<AppConfig>(s)
}

/// Attempt to load `AppConfig` from KOLB_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("KOLB_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_app_config(&s) {
      Ok(cfg) => {
        info!(target: "kolb_backend", %path, "Loaded app config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "kolb_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "kolb_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
