use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use domain::alert::entity::{extract_alert_list, sort_newest_first};
use domain::alert::quota::QuotaState;
use domain::auth::entity::Credentials;
use domain::common::error::DomainError;
use domain::hunting::query::{build_query, extract_results};
use domain::observable::entity::{Observable, ObservableType, RawObservable};
use domain::observable::normalizer::normalize;
use domain::observable::resolver::{resolve, AlertRoute, Resolution};
use domain::sighting::assembler::{from_alert, from_hunting_event};
use domain::sighting::entity::Sighting;
use ports::secondary::edr_client::{EdrClientPort, EdrSession};

const FILES_SEGMENT: &str = "files";
const ALERTS_SUB_PATH: &str = "alerts";

/// Drives the per-request enrichment pipeline: normalize, resolve,
/// fetch alerts, fall back to hunting within quota, assemble sightings.
///
/// One backend session covers the whole request. It is acquired only
/// after the empty-input short-circuit and released when the session
/// value drops, on every exit path including errors.
pub struct EnrichmentService {
    client: Arc<dyn EdrClientPort>,
    supported_types: HashSet<ObservableType>,
    entities_limit: usize,
}

impl EnrichmentService {
    pub fn new(
        client: Arc<dyn EdrClientPort>,
        supported_types: HashSet<ObservableType>,
        entities_limit: usize,
    ) -> Self {
        Self {
            client,
            supported_types,
            entities_limit,
        }
    }

    /// Enrich a batch of raw observables into sightings.
    ///
    /// All-or-nothing: the first failing observable aborts the request
    /// and sightings assembled for earlier observables are discarded.
    pub async fn observe(
        &self,
        credentials: &Credentials,
        raw: &[RawObservable],
    ) -> Result<Vec<Sighting>, DomainError> {
        let observables = normalize(raw, &self.supported_types);
        if observables.is_empty() {
            debug!("no supported observables in request, skipping backend");
            return Ok(Vec::new());
        }

        let session = self.client.open_session(credentials).await?;

        let mut sightings = Vec::new();
        for observable in &observables {
            let mut batch = self.enrich_one(session.as_ref(), observable).await?;
            debug!(
                otype = %observable.otype,
                count = batch.len(),
                "observable enriched"
            );
            sightings.append(&mut batch);
        }

        Ok(sightings)
    }

    /// Enrich a single observable: direct alerts first (newest-first,
    /// quota-truncated), then hunting events capped at what remains.
    async fn enrich_one(
        &self,
        session: &dyn EdrSession,
        observable: &Observable,
    ) -> Result<Vec<Sighting>, DomainError> {
        let resolution = resolve(observable.otype)?;

        let mut alerts = self.fetch_alerts(session, observable, resolution).await?;
        sort_newest_first(&mut alerts);

        let mut quota = QuotaState::new(self.entities_limit);
        let alerts = quota.admit_alerts(alerts);

        let events = match quota.hunting_budget() {
            Some(budget) => {
                let query = build_query(observable.otype, &observable.value, budget);
                debug!(%query, "running hunting fallback");
                let body = session.run_query(&query).await?;
                quota.admit_events(extract_results(body.as_ref()))
            }
            None => {
                debug!("quota filled by alerts, skipping hunting fallback");
                Vec::new()
            }
        };

        let count = quota.consumed();
        let mut sightings = Vec::with_capacity(count);
        for alert in alerts {
            sightings.push(from_alert(alert, observable, resolution.entity, count));
        }
        for event in events {
            sightings.push(from_hunting_event(event, observable, count));
        }

        Ok(sightings)
    }

    /// Fetch direct alerts for a resolved observable.
    ///
    /// Direct routes take one GET. The sha256 route first fetches the
    /// file record and only queries alerts when the record exists and
    /// carries a sha1; a missing record is zero alerts, not an error.
    async fn fetch_alerts(
        &self,
        session: &dyn EdrSession,
        observable: &Observable,
        resolution: Resolution,
    ) -> Result<Vec<Value>, DomainError> {
        match resolution.route {
            AlertRoute::Direct { segment } => {
                let url = session.resolve(segment, &observable.value, Some(ALERTS_SUB_PATH));
                let body = session.get(&url).await?;
                Ok(extract_alert_list(body.as_ref()))
            }
            AlertRoute::FileTwoHop => {
                let file_url = session.resolve(FILES_SEGMENT, &observable.value, None);
                let record = session.get(&file_url).await?;
                let sha1 = record
                    .as_ref()
                    .and_then(|r| r.get("sha1"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                match sha1 {
                    Some(sha1) => {
                        let url = session.resolve(FILES_SEGMENT, &sha1, Some(ALERTS_SUB_PATH));
                        let body = session.get(&url).await?;
                        Ok(extract_alert_list(body.as_ref()))
                    }
                    None => {
                        debug!(value = %observable.value, "no file record for sha256");
                        Ok(Vec::new())
                    }
                }
            }
        }
    }
}
