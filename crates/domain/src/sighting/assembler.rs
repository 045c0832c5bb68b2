use serde_json::Value;

use crate::alert::entity::ALERT_CREATION_TIME;
use crate::observable::entity::Observable;
use crate::observable::resolver::EntityCategory;
use crate::sighting::entity::{ObservedTime, Sighting};

const DOC_TYPE: &str = "sighting";
const SOURCE_ALERT: &str = "EDR alert";
const SOURCE_HUNTING: &str = "EDR hunting";
const EVENT_TIMESTAMP: &str = "Timestamp";

fn observed_time(record: &Value, field: &str) -> Option<ObservedTime> {
    record.get(field).and_then(Value::as_str).map(|t| ObservedTime {
        start_time: t.to_string(),
    })
}

/// Build a sighting from a direct alert. High confidence, carries the
/// entity category the alert was looked up under.
pub fn from_alert(
    alert: Value,
    observable: &Observable,
    entity: EntityCategory,
    count: usize,
) -> Sighting {
    Sighting {
        doc_type: DOC_TYPE.to_string(),
        count,
        confidence: "High".to_string(),
        source: SOURCE_ALERT.to_string(),
        observables: vec![observable.clone()],
        observed_time: observed_time(&alert, ALERT_CREATION_TIME),
        entity: Some(entity.as_str().to_string()),
        data: alert,
    }
}

/// Build a sighting from a hunting event. Medium confidence, no entity
/// category since hunting bypasses the alert-lookup paths.
pub fn from_hunting_event(event: Value, observable: &Observable, count: usize) -> Sighting {
    Sighting {
        doc_type: DOC_TYPE.to_string(),
        count,
        confidence: "Medium".to_string(),
        source: SOURCE_HUNTING.to_string(),
        observables: vec![observable.clone()],
        observed_time: observed_time(&event, EVENT_TIMESTAMP),
        entity: None,
        data: event,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::entity::ObservableType;
    use serde_json::json;

    fn ip_observable() -> Observable {
        Observable {
            otype: ObservableType::Ip,
            value: "1.2.3.4".to_string(),
        }
    }

    #[test]
    fn alert_sighting_is_high_confidence_with_entity() {
        let alert = json!({"id": "a1", "alertCreationTime": "2026-01-02T03:04:05Z"});
        let s = from_alert(alert, &ip_observable(), EntityCategory::Ips, 3);
        assert_eq!(s.doc_type, "sighting");
        assert_eq!(s.confidence, "High");
        assert_eq!(s.source, "EDR alert");
        assert_eq!(s.count, 3);
        assert_eq!(s.entity.as_deref(), Some("ips"));
        assert_eq!(
            s.observed_time.unwrap().start_time,
            "2026-01-02T03:04:05Z"
        );
        assert_eq!(s.data["id"], "a1");
    }

    #[test]
    fn hunting_sighting_is_medium_confidence_without_entity() {
        let event = json!({"Timestamp": "2026-02-03T00:00:00Z", "RemoteIP": "1.2.3.4"});
        let s = from_hunting_event(event, &ip_observable(), 2);
        assert_eq!(s.confidence, "Medium");
        assert_eq!(s.source, "EDR hunting");
        assert!(s.entity.is_none());
        assert_eq!(s.observed_time.unwrap().start_time, "2026-02-03T00:00:00Z");
    }

    #[test]
    fn records_without_timestamps_get_no_observed_time() {
        let s = from_alert(json!({"id": "a"}), &ip_observable(), EntityCategory::Ips, 1);
        assert!(s.observed_time.is_none());
        let s = from_hunting_event(json!({}), &ip_observable(), 1);
        assert!(s.observed_time.is_none());
    }

    #[test]
    fn source_observable_is_carried_on_the_sighting() {
        let s = from_hunting_event(json!({}), &ip_observable(), 1);
        assert_eq!(s.observables.len(), 1);
        assert_eq!(s.observables[0].value, "1.2.3.4");
    }
}
