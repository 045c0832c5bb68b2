use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;

use domain::auth::entity::Credentials;
use domain::auth::error::AuthError;
use domain::observable::entity::RawObservable;
use domain::sighting::entity::Sighting;

use super::error::ApiError;
use super::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct EmptyData {}

#[derive(Serialize, ToSchema)]
pub struct DeliberateResponse {
    pub data: EmptyData,
}

#[derive(Serialize, ToSchema)]
pub struct SightingsBucket {
    /// Equals `docs.len()`.
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub docs: Vec<Sighting>,
}

#[derive(Serialize, ToSchema)]
pub struct ObserveData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sightings: Option<SightingsBucket>,
}

#[derive(Serialize, ToSchema)]
pub struct ObserveResponse {
    pub data: ObserveData,
}

#[derive(Serialize, ToSchema)]
pub struct ReferResponse {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::TokenMissing)?;
    value.strip_prefix("Bearer ").ok_or(AuthError::TokenMissing)
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Credentials, ApiError> {
    let token = bearer_token(headers)?;
    Ok(state.credentials.credentials(token)?)
}

/// Deliberation is not implemented for this backend; credentials are
/// still checked so the aggregator gets a consistent auth surface.
#[utoipa::path(
    post, path = "/deliberate/observables",
    tag = "Enrich",
    request_body = Vec<Object>,
    responses(
        (status = 200, description = "Empty deliberation result", body = DeliberateResponse),
        (status = 401, description = "Missing or invalid credentials", body = super::error::ErrorBody),
    )
)]
pub async fn deliberate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(_observables): Json<Vec<RawObservable>>,
) -> Result<Json<DeliberateResponse>, ApiError> {
    authenticate(&state, &headers)?;
    Ok(Json(DeliberateResponse { data: EmptyData {} }))
}

/// Run the full enrichment pipeline over the submitted observables.
#[utoipa::path(
    post, path = "/observe/observables",
    tag = "Enrich",
    request_body = Vec<Object>,
    responses(
        (status = 200, description = "Assembled sightings, or an empty object", body = ObserveResponse),
        (status = 400, description = "Unsupported observable type", body = super::error::ErrorBody),
        (status = 401, description = "Missing or invalid credentials", body = super::error::ErrorBody),
        (status = 503, description = "Backend unavailable", body = super::error::ErrorBody),
    )
)]
pub async fn observe(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(observables): Json<Vec<RawObservable>>,
) -> Result<Json<ObserveResponse>, ApiError> {
    let credentials = authenticate(&state, &headers)?;
    let sightings = state.enrichment.observe(&credentials, &observables).await?;
    info!(count = sightings.len(), "observe request enriched");

    let data = if sightings.is_empty() {
        ObserveData { sightings: None }
    } else {
        ObserveData {
            sightings: Some(SightingsBucket {
                count: sightings.len(),
                docs: sightings,
            }),
        }
    };
    Ok(Json(ObserveResponse { data }))
}

/// Referral links are not implemented for this backend. Nothing is
/// evaluated, so no credentials are required either.
#[utoipa::path(
    post, path = "/refer/observables",
    tag = "Enrich",
    request_body = Vec<Object>,
    responses(
        (status = 200, description = "Always an empty list", body = ReferResponse),
    )
)]
pub async fn refer(
    Json(_observables): Json<Vec<RawObservable>>,
) -> Json<ReferResponse> {
    Json(ReferResponse { data: Vec::new() })
}
