//! Relay configuration: structs, parsing, and validation.
//!
//! Split across sub-modules:
//! - `common`: shared helpers and `ConfigError`
//! - `backend`: EDR backend settings

mod backend;
mod common;

pub use backend::BackendConfig;
pub use common::ConfigError;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HTTP_PORT;
use common::warn_if_world_readable;

// ── Top-level config ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    pub relay: RelayInfo,

    #[serde(default)]
    pub backend: BackendConfig,
}

impl RelayConfig {
    /// Load config from a YAML file.
    ///
    /// On Unix, logs a warning if the file is world-readable, since it
    /// carries the JWT signing secret.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        warn_if_world_readable(path, "config file");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Return a copy of the config with the signing secret masked.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut sanitized = self.clone();
        sanitized.relay.secret_key = "***".to_string();
        sanitized
    }

    /// Validate the config after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay.secret_key.is_empty() {
            return Err(ConfigError::Validation {
                field: "relay.secret_key".to_string(),
                message: "signing secret must not be empty".to_string(),
            });
        }
        self.backend.validate()
    }
}

// ── Relay info ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayInfo {
    /// Secret the aggregator signs relay JWTs with.
    pub secret_key: String,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// IP address for the HTTP server to bind to.
    /// Defaults to `127.0.0.1` (localhost only). Set to `0.0.0.0` to
    /// listen on all interfaces.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Enable Swagger UI at `/swagger-ui`. Disabled by default.
    #[serde(default)]
    pub swagger_ui: bool,
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}
fn default_log_format() -> LogFormat {
    LogFormat::Json
}
fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ── Log level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "invalid log level '{s}': expected error|warn|info|debug|trace"
            )),
        }
    }
}

// ── Log format ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "pretty" => Ok(Self::Text),
            _ => Err(format!("invalid log format '{s}': expected json|text")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = "relay:\n  secret_key: s3cret\n";

    #[test]
    fn minimal_yaml_gets_defaults() {
        let config = RelayConfig::from_yaml(MINIMAL_YAML).unwrap();
        assert_eq!(config.relay.log_level, LogLevel::Info);
        assert_eq!(config.relay.log_format, LogFormat::Json);
        assert_eq!(config.relay.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.relay.bind_address, "127.0.0.1");
        assert!(!config.relay.swagger_ui);
        assert_eq!(config.backend.entities_limit, 100);
    }

    #[test]
    fn full_yaml_round_trips() {
        let yaml = r"
relay:
  secret_key: s3cret
  log_level: debug
  log_format: text
  http_port: 9090
  bind_address: 0.0.0.0
  swagger_ui: true
backend:
  api_url: https://edr.example.test/api
  auth_url: https://login.example.test
  observable_types: [ip, domain]
  entities_limit: 25
";
        let config = RelayConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.relay.log_level, LogLevel::Debug);
        assert_eq!(config.relay.http_port, 9090);
        assert_eq!(config.backend.entities_limit, 25);
        assert_eq!(config.backend.supported_types().len(), 2);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = RelayConfig::from_yaml("relay:\n  secret_key: ''\n").unwrap_err();
        assert!(err.to_string().contains("relay.secret_key"));
    }

    #[test]
    fn unknown_top_level_field_is_rejected() {
        let yaml = "relay:\n  secret_key: s\nextra: 1\n";
        assert!(RelayConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn invalid_observable_type_is_rejected() {
        let yaml = "relay:\n  secret_key: s\nbackend:\n  observable_types: [url]\n";
        assert!(RelayConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn sanitized_masks_the_secret() {
        let config = RelayConfig::from_yaml(MINIMAL_YAML).unwrap();
        assert_eq!(config.sanitized().relay.secret_key, "***");
    }

    #[test]
    fn log_level_parses_aliases() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn log_format_parses_aliases() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
