use std::collections::HashSet;

use crate::observable::entity::{Observable, ObservableType, RawObservable};

/// Reduce raw input to unique, supported observables.
///
/// Types are lowercased before matching. Observables with a type outside
/// `supported` are silently dropped; the resolver keeps a hard guard for
/// anything that bypasses this filter. Duplicates by `(type, value)` keep
/// the first occurrence, and first-seen order is preserved.
pub fn normalize(raw: &[RawObservable], supported: &HashSet<ObservableType>) -> Vec<Observable> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for obs in raw {
        let Ok(otype) = obs.otype.parse::<ObservableType>() else {
            continue;
        };
        if !supported.contains(&otype) {
            continue;
        }
        if seen.insert((otype, obs.value.clone())) {
            result.push(Observable {
                otype,
                value: obs.value.clone(),
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(otype: &str, value: &str) -> RawObservable {
        RawObservable {
            otype: otype.to_string(),
            value: value.to_string(),
        }
    }

    fn default_supported() -> HashSet<ObservableType> {
        [
            ObservableType::Sha1,
            ObservableType::Sha256,
            ObservableType::Ip,
            ObservableType::Domain,
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn duplicates_keep_first_occurrence_only() {
        let input = vec![raw("sha256", "abc"), raw("sha256", "abc")];
        let result = normalize(&input, &default_supported());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].otype, ObservableType::Sha256);
        assert_eq!(result[0].value, "abc");
    }

    #[test]
    fn unsupported_types_are_silently_dropped() {
        let input = vec![raw("url", "http://x"), raw("ip", "1.2.3.4")];
        let result = normalize(&input, &default_supported());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].otype, ObservableType::Ip);
    }

    #[test]
    fn types_outside_configured_set_are_dropped() {
        let supported = [ObservableType::Ip].into_iter().collect();
        let input = vec![raw("sha1", "abc"), raw("ip", "1.2.3.4")];
        let result = normalize(&input, &supported);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].otype, ObservableType::Ip);
    }

    #[test]
    fn type_matching_is_case_insensitive() {
        let input = vec![raw("SHA1", "abc"), raw("sha1", "abc")];
        let result = normalize(&input, &default_supported());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let input = vec![
            raw("domain", "evil.test"),
            raw("ip", "1.2.3.4"),
            raw("sha1", "abc"),
            raw("domain", "evil.test"),
        ];
        let result = normalize(&input, &default_supported());
        let types: Vec<_> = result.iter().map(|o| o.otype).collect();
        assert_eq!(
            types,
            vec![ObservableType::Domain, ObservableType::Ip, ObservableType::Sha1]
        );
    }

    #[test]
    fn same_value_different_type_is_not_a_duplicate() {
        let input = vec![raw("sha1", "abc"), raw("sha256", "abc")];
        let result = normalize(&input, &default_supported());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(&[], &default_supported()).is_empty());
    }
}
