use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Maximum request body size for enrichment endpoints (64 KiB).
const MAX_BODY_SIZE: usize = 64 * 1024;

use super::enrich_handler::{deliberate, observe, refer};
use super::health_handler::{healthz, readyz};
use super::openapi::ApiDoc;
use super::state::AppState;

/// Build the Axum router for the relay.
///
/// `/healthz` and `/readyz` are open probes; the enrichment routes
/// check bearer credentials inside the handlers since the decoded
/// claims are the backend credentials themselves.
pub fn build_router(state: Arc<AppState>, swagger_ui: bool) -> Router {
    let probe_routes = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz));

    let enrich_routes = Router::new()
        .route("/deliberate/observables", post(deliberate))
        .route("/observe/observables", post(observe))
        .route("/refer/observables", post(refer))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    let router = probe_routes.merge(enrich_routes);

    let router = if swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    router.with_state(state)
}
