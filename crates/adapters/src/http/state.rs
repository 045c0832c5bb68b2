use std::sync::Arc;

use application::enrichment::EnrichmentService;
use ports::secondary::credentials_provider::CredentialsProvider;

/// Shared state handed to every HTTP handler.
pub struct AppState {
    pub enrichment: EnrichmentService,
    pub credentials: Arc<dyn CredentialsProvider>,
}

impl AppState {
    pub fn new(enrichment: EnrichmentService, credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self {
            enrichment,
            credentials,
        }
    }
}
