use serde_json::Value;

use crate::observable::entity::ObservableType;

/// Build the advanced-hunting query for one observable.
///
/// Total over the type enum: every type has a device-event template,
/// including md5 which has no direct alert route. The limit clause caps
/// server-side result size at the remaining quota budget.
pub fn build_query(otype: ObservableType, value: &str, limit: usize) -> String {
    match otype {
        ObservableType::Sha1 => {
            format!("DeviceFileEvents | where SHA1 == '{value}' | limit {limit}")
        }
        ObservableType::Sha256 => {
            format!("DeviceFileEvents | where SHA256 == '{value}' | limit {limit}")
        }
        ObservableType::Md5 => {
            format!("DeviceFileEvents | where MD5 == '{value}' | limit {limit}")
        }
        ObservableType::Ip => {
            format!("DeviceNetworkEvents | where RemoteIP == '{value}' | limit {limit}")
        }
        ObservableType::Domain => {
            format!("DeviceNetworkEvents | where RemoteUrl == '{value}' | limit {limit}")
        }
    }
}

/// Unwrap the query response envelope `{"Results": [...]}`.
///
/// Anything malformed or missing means "no events found".
pub fn extract_results(body: Option<&Value>) -> Vec<Value> {
    body.and_then(|b| b.get("Results"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
