use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use domain::auth::entity::Credentials;
use domain::common::error::DomainError;
use ports::secondary::edr_client::{BoxFuture, EdrClientPort, EdrSession};

const ADVANCED_QUERY_PATH: &str = "advancedqueries/run";

/// Per-request timeout for all backend calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// reqwest-backed client for the EDR REST API.
///
/// `api_url` is the API root (ending in `/api`), `auth_url` the OAuth2
/// login origin. Session tokens are requested per enrichment request
/// with the credentials the relay JWT carried.
pub struct EdrHttpClient {
    http: reqwest::Client,
    api_url: String,
    auth_url: String,
}

impl EdrHttpClient {
    /// Create a new client with default settings (30s timeout).
    pub fn new(api_url: String, auth_url: String) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("sightrelay/0.1")
            .build()
            .map_err(|e| DomainError::BackendError(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            auth_url: auth_url.trim_end_matches('/').to_string(),
        })
    }

    /// The resource the token is scoped to: the API origin without the
    /// trailing `/api` path.
    fn api_resource(&self) -> &str {
        self.api_url.strip_suffix("/api").unwrap_or(&self.api_url)
    }

    fn token_url(&self, tenant_id: &str) -> String {
        format!("{}/{}/oauth2/token", self.auth_url, tenant_id)
    }
}

impl EdrClientPort for EdrHttpClient {
    fn open_session<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<Box<dyn EdrSession>, DomainError>> {
        Box::pin(async move {
            let url = self.token_url(&credentials.tenant_id);
            debug!(%url, "requesting backend session token");

            let params = [
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("resource", self.api_resource()),
            ];
            let response = self
                .http
                .post(&url)
                .form(&params)
                .send()
                .await
                .map_err(|err| DomainError::BackendError(err.to_string()))?;

            if !response.status().is_success() {
                return Err(DomainError::BackendError(format!(
                    "token request failed with status {}",
                    response.status()
                )));
            }

            let token: TokenResponse = response
                .json()
                .await
                .map_err(|err| DomainError::BackendError(err.to_string()))?;

            Ok(Box::new(HttpSession {
                http: self.http.clone(),
                api_url: self.api_url.clone(),
                access_token: token.access_token,
            }) as Box<dyn EdrSession>)
        })
    }
}

/// One authenticated session against the API. The bearer token lives
/// exactly as long as this value.
pub struct HttpSession {
    http: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl HttpSession {
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<Option<Value>, DomainError> {
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DomainError::BackendError(format!(
                "backend returned status {}",
                response.status()
            )));
        }
        let body = response
            .json()
            .await
            .map_err(|err| DomainError::BackendError(err.to_string()))?;
        Ok(Some(body))
    }
}

impl EdrSession for HttpSession {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Option<Value>, DomainError>> {
        Box::pin(async move {
            let response = self
                .http
                .get(url)
                .bearer_auth(&self.access_token)
                .send()
                .await
                .map_err(|err| DomainError::BackendError(err.to_string()))?;
            Self::parse_response(response).await
        })
    }

    fn run_query<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Option<Value>, DomainError>> {
        Box::pin(async move {
            let url = format!("{}/{}", self.api_url, ADVANCED_QUERY_PATH);
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(&serde_json::json!({ "Query": query }))
                .send()
                .await
                .map_err(|err| DomainError::BackendError(err.to_string()))?;
            Self::parse_response(response).await
        })
    }

    fn resolve(&self, segment: &str, key: &str, sub_path: Option<&str>) -> String {
        match sub_path {
            Some(sub) => format!("{}/{}/{}/{}", self.api_url, segment, key, sub),
            None => format!("{}/{}/{}", self.api_url, segment, key),
        }
    }
}
