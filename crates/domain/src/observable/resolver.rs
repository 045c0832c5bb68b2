use std::fmt;

use crate::common::error::DomainError;
use crate::observable::entity::ObservableType;

/// Backend grouping an alert lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Files,
    Urls,
    Ips,
}

impl EntityCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Urls => "urls",
            Self::Ips => "ips",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How alerts are looked up for a resolved observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertRoute {
    /// One call: `{segment}/{value}/alerts`.
    ///
    /// The URL segment is not always the entity category: domain
    /// observables group under `urls` but are looked up via `domains`.
    Direct { segment: &'static str },
    /// Two calls: file record by sha256 first, then alerts by the
    /// record's `sha1`. A missing record means an empty result.
    FileTwoHop,
}

/// Resolved lookup target for one observable, immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub entity: EntityCategory,
    pub route: AlertRoute,
}

/// Map an observable type to its backend entity category and alert route.
///
/// Exhaustive: a type without an alert route fails loudly. The normalizer
/// filters such types out up front, so reaching the error here means a
/// caller bypassed normalization; it must stay a hard guard either way.
pub fn resolve(otype: ObservableType) -> Result<Resolution, DomainError> {
    match otype {
        ObservableType::Sha256 => Ok(Resolution {
            entity: EntityCategory::Files,
            route: AlertRoute::FileTwoHop,
        }),
        ObservableType::Sha1 => Ok(Resolution {
            entity: EntityCategory::Files,
            route: AlertRoute::Direct { segment: "files" },
        }),
        ObservableType::Domain => Ok(Resolution {
            entity: EntityCategory::Urls,
            route: AlertRoute::Direct { segment: "domains" },
        }),
        ObservableType::Ip => Ok(Resolution {
            entity: EntityCategory::Ips,
            route: AlertRoute::Direct { segment: "ips" },
        }),
        ObservableType::Md5 => Err(DomainError::UnsupportedObservableType(
            otype.as_str().to_string(),
        )),
    }
}

/// Whether a type has an alert route at all. Config validation calls
/// this at startup so a configured type can never fail mid-request.
pub fn has_alert_route(otype: ObservableType) -> bool {
    resolve(otype).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_resolves_to_files_two_hop() {
        let r = resolve(ObservableType::Sha256).unwrap();
        assert_eq!(r.entity, EntityCategory::Files);
        assert_eq!(r.route, AlertRoute::FileTwoHop);
    }

    #[test]
    fn sha1_resolves_to_files_direct() {
        let r = resolve(ObservableType::Sha1).unwrap();
        assert_eq!(r.entity, EntityCategory::Files);
        assert_eq!(r.route, AlertRoute::Direct { segment: "files" });
    }

    #[test]
    fn domain_groups_under_urls_but_looks_up_via_domains() {
        let r = resolve(ObservableType::Domain).unwrap();
        assert_eq!(r.entity, EntityCategory::Urls);
        assert_eq!(r.route, AlertRoute::Direct { segment: "domains" });
    }

    #[test]
    fn ip_resolves_to_ips_direct() {
        let r = resolve(ObservableType::Ip).unwrap();
        assert_eq!(r.entity, EntityCategory::Ips);
        assert_eq!(r.route, AlertRoute::Direct { segment: "ips" });
    }

    #[test]
    fn md5_has_no_alert_route() {
        let err = resolve(ObservableType::Md5).unwrap_err();
        assert_eq!(err.to_string(), "'md5' type is not supported");
        assert!(!has_alert_route(ObservableType::Md5));
    }

    #[test]
    fn all_default_types_have_alert_routes() {
        for otype in [
            ObservableType::Sha1,
            ObservableType::Sha256,
            ObservableType::Ip,
            ObservableType::Domain,
        ] {
            assert!(has_alert_route(otype), "{otype} should resolve");
        }
    }
}
