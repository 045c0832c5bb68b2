use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::observable::entity::Observable;

/// When the backend saw the observable, taken from the record timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedTime {
    pub start_time: String,
}

/// One normalized sighting record, assembled from an alert or a hunting
/// event. The backend record rides along untouched under `data`; schema
/// correctness of that payload is the backend's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sighting {
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Total results admitted for the source observable, post quota.
    pub count: usize,
    pub confidence: String,
    pub source: String,
    pub observables: Vec<Observable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_time: Option<ObservedTime>,
    /// Backend entity category, present for alert-derived sightings only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    pub data: Value,
}
