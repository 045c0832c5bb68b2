use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`.
    #[schema(value_type = String)]
    pub status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Always `"ready"` once the router is serving.
    #[schema(value_type = String)]
    pub status: &'static str,
}

/// Liveness probe, returns 200 whenever the process is running.
#[utoipa::path(
    get, path = "/healthz",
    tag = "Health",
    responses(
        (status = 200, description = "Relay is alive", body = HealthResponse),
    )
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe. The relay keeps no warm state, so serving traffic
/// and being ready are the same thing.
#[utoipa::path(
    get, path = "/readyz",
    tag = "Health",
    responses(
        (status = 200, description = "Relay is ready", body = ReadyResponse),
    )
)]
pub async fn readyz() -> Json<ReadyResponse> {
    Json(ReadyResponse { status: "ready" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthz_always_returns_ok() {
        let Json(resp) = healthz().await;
        assert_eq!(resp.status, "ok");
    }

    #[tokio::test]
    async fn readyz_always_returns_ready() {
        let Json(resp) = readyz().await;
        assert_eq!(resp.status, "ready");
    }
}
