use serde::{Deserialize, Serialize};

/// Backend API credentials carried in the aggregator's relay token.
///
/// Requested once per enrichment call, used to open the backend session,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}
