use utoipa::OpenApi;

use super::enrich_handler::{
    DeliberateResponse, EmptyData, ObserveData, ObserveResponse, ReferResponse, SightingsBucket,
};
use super::error::{ErrorBody, ErrorDetail};
use super::health_handler::{HealthResponse, ReadyResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "sightrelay",
        description = "Observable enrichment relay for an EDR backend"
    ),
    paths(
        super::enrich_handler::deliberate,
        super::enrich_handler::observe,
        super::enrich_handler::refer,
        super::health_handler::healthz,
        super::health_handler::readyz,
    ),
    components(schemas(
        DeliberateResponse,
        EmptyData,
        ObserveData,
        ObserveResponse,
        ReferResponse,
        SightingsBucket,
        ErrorBody,
        ErrorDetail,
        HealthResponse,
        ReadyResponse,
    )),
    tags(
        (name = "Enrich", description = "Observable enrichment endpoints"),
        (name = "Health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
