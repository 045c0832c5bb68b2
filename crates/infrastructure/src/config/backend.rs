use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use domain::observable::entity::ObservableType;
use domain::observable::resolver::has_alert_route;

use crate::constants::{DEFAULT_API_URL, DEFAULT_AUTH_URL, DEFAULT_ENTITIES_LIMIT};

use super::common::ConfigError;

/// EDR backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// API root, including the `/api` path.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// OAuth2 login origin.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// Observable types the relay accepts. Every listed type must have
    /// a direct alert route; md5 only exists on the hunting side and is
    /// rejected here so the resolver can never fail mid-request.
    #[serde(default = "default_observable_types")]
    pub observable_types: Vec<String>,

    /// Per-observable result ceiling across both retrieval tiers.
    #[serde(default = "default_entities_limit")]
    pub entities_limit: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_url: default_auth_url(),
            observable_types: default_observable_types(),
            entities_limit: default_entities_limit(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_observable_types() -> Vec<String> {
    ["sha1", "sha256", "ip", "domain"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_entities_limit() -> usize {
    DEFAULT_ENTITIES_LIMIT
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_url.starts_with("http") {
            return Err(ConfigError::Validation {
                field: "backend.api_url".to_string(),
                message: format!("'{}' is not an HTTP(S) URL", self.api_url),
            });
        }
        if !self.auth_url.starts_with("http") {
            return Err(ConfigError::Validation {
                field: "backend.auth_url".to_string(),
                message: format!("'{}' is not an HTTP(S) URL", self.auth_url),
            });
        }
        if self.entities_limit == 0 {
            return Err(ConfigError::Validation {
                field: "backend.entities_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.observable_types.is_empty() {
            return Err(ConfigError::Validation {
                field: "backend.observable_types".to_string(),
                message: "at least one observable type is required".to_string(),
            });
        }

        for (idx, name) in self.observable_types.iter().enumerate() {
            let otype =
                name.parse::<ObservableType>()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: format!("backend.observable_types[{idx}]"),
                        value: name.clone(),
                        expected: "sha1, sha256, ip, domain".to_string(),
                    })?;
            if !has_alert_route(otype) {
                return Err(ConfigError::InvalidValue {
                    field: format!("backend.observable_types[{idx}]"),
                    value: name.clone(),
                    expected: "a type with a direct alert route (sha1, sha256, ip, domain)"
                        .to_string(),
                });
            }
        }
        Ok(())
    }

    /// The validated supported-type set. Call after [`Self::validate`];
    /// unparseable entries were rejected there and are skipped here.
    pub fn supported_types(&self) -> HashSet<ObservableType> {
        self.observable_types
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = BackendConfig::default();
        config.validate().unwrap();
        assert_eq!(config.entities_limit, 100);
        assert_eq!(config.supported_types().len(), 4);
    }

    #[test]
    fn zero_entities_limit_is_rejected() {
        let config = BackendConfig {
            entities_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_observable_type_is_rejected() {
        let config = BackendConfig {
            observable_types: vec!["url".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("observable_types[0]"));
    }

    #[test]
    fn md5_is_rejected_for_lacking_an_alert_route() {
        let config = BackendConfig {
            observable_types: vec!["sha1".to_string(), "md5".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("observable_types[1]"));
    }

    #[test]
    fn non_http_api_url_is_rejected() {
        let config = BackendConfig {
            api_url: "ftp://example.test".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn supported_types_parses_configured_names() {
        let config = BackendConfig {
            observable_types: vec!["ip".to_string(), "SHA1".to_string()],
            ..Default::default()
        };
        let types = config.supported_types();
        assert!(types.contains(&ObservableType::Ip));
        assert!(types.contains(&ObservableType::Sha1));
        assert_eq!(types.len(), 2);
    }
}
