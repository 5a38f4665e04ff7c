use std::{env, fmt, net::SocketAddr, path::PathBuf};

use serde::Deserialize;

use crate::middleware::static_cors::{AllowedOrigins, WILDCARD};

pub const MODE_VAR: &str = "RAG_ENV";
pub const ALLOWED_ORIGINS_VAR: &str = "CORS_ALLOW_ORIGIN";
pub const PRODUCTION: &str = "production";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
  Production,
  Development(String),
}

impl Mode {
  /// Anything but the literal `production` is a development mode. Unset means production.
  pub fn from_value(value: Option<&str>) -> Self {
    match value.unwrap_or(PRODUCTION) {
      PRODUCTION => Mode::Production,
      other => Mode::Development(other.to_owned()),
    }
  }

  pub fn from_env() -> Self {
    Self::from_value(env::var(MODE_VAR).ok().as_deref())
  }

  pub fn is_production(&self) -> bool {
    matches!(self, Mode::Production)
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Mode::Production => f.write_str(PRODUCTION),
      Mode::Development(name) => f.write_str(name),
    }
  }
}

/// Splits a `;` separated origin list, dropping blank entries.
pub fn parse_origin_list(value: &str) -> Vec<String> {
  value
    .split(';')
    .map(str::trim)
    .filter(|origin| !origin.is_empty())
    .map(str::to_owned)
    .collect()
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
  pub listen: SocketAddr,
  pub static_dir: PathBuf,
  pub allowed_origins: Option<Vec<String>>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
      static_dir: PathBuf::from("static"),
      allowed_origins: None,
    }
  }
}

impl Config {
  /// The file's list wins, then `CORS_ALLOW_ORIGIN`, then `*`.
  pub fn allowed_origins(&self, env_value: Option<&str>) -> AllowedOrigins {
    match (&self.allowed_origins, env_value) {
      (Some(origins), _) => AllowedOrigins::new(origins.iter().map(String::as_str)),
      (None, Some(value)) => AllowedOrigins::new(parse_origin_list(value)),
      (None, None) => AllowedOrigins::new([WILDCARD]),
    }
  }

  pub fn allowed_origins_from_env(&self) -> AllowedOrigins {
    self.allowed_origins(env::var(ALLOWED_ORIGINS_VAR).ok().as_deref())
  }
}
