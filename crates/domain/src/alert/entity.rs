use serde_json::Value;

/// Field the backend timestamps alerts with, also the sort key.
pub const ALERT_CREATION_TIME: &str = "alertCreationTime";

/// Unwrap the backend's alert envelope `{"value": [...]}`.
///
/// A missing body, a non-object body, or a missing/non-array `value`
/// field all mean "no alerts", never an error.
pub fn extract_alert_list(body: Option<&Value>) -> Vec<Value> {
    body.and_then(|b| b.get("value"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Sort alerts newest first by `alertCreationTime`.
///
/// Timestamps are RFC 3339 strings, so lexicographic order is
/// chronological. Alerts without the field sort last.
pub fn sort_newest_first(alerts: &mut [Value]) {
    alerts.sort_by(|a, b| {
        let ta = a.get(ALERT_CREATION_TIME).and_then(Value::as_str).unwrap_or("");
        let tb = b.get(ALERT_CREATION_TIME).and_then(Value::as_str).unwrap_or("");
        tb.cmp(ta)
    });
}
