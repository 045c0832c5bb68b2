use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::DomainError;

/// Observable kinds the relay understands.
///
/// This enum is the single source of truth for type-keyed dispatch: the
/// alert-route table (`observable::resolver`) and the hunting-template
/// table (`hunting::query`) are both keyed on it, and config validation
/// checks the configured supported set against both at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservableType {
    Sha1,
    Sha256,
    Md5,
    Ip,
    Domain,
}

impl ObservableType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Md5 => "md5",
            Self::Ip => "ip",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for ObservableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservableType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "md5" => Ok(Self::Md5),
            "ip" => Ok(Self::Ip),
            "domain" => Ok(Self::Domain),
            _ => Err(DomainError::UnsupportedObservableType(s.to_string())),
        }
    }
}

/// Wire-format observable as submitted by the aggregator: an
/// uninterpreted `{type, value}` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObservable {
    #[serde(rename = "type")]
    pub otype: String,
    pub value: String,
}

/// A normalized observable: supported type plus value.
///
/// Uniqueness within one request is by the whole `(type, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observable {
    #[serde(rename = "type")]
    pub otype: ObservableType,
    pub value: String,
}
