use std::future::Future;
use std::pin::Pin;

use domain::auth::entity::Credentials;
use domain::common::error::DomainError;
use serde_json::Value;

/// Boxed future used to keep the ports dyn-compatible.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An authenticated backend session, valid for one enrichment request.
///
/// Acquired once per request and released when dropped. Responses come
/// back as uninterpreted JSON; `Ok(None)` means the backend had nothing
/// for the lookup, which is not an error.
pub trait EdrSession: Send + Sync {
    /// GET an absolute API URL previously built with [`Self::resolve`].
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Option<Value>, DomainError>>;

    /// Submit an advanced-hunting query to the query-execution endpoint.
    fn run_query<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Option<Value>, DomainError>>;

    /// Build an absolute API URL: `{api}/{segment}/{key}` plus an
    /// optional trailing path such as `alerts`.
    fn resolve(&self, segment: &str, key: &str, sub_path: Option<&str>) -> String;
}

/// Factory port for backend sessions.
pub trait EdrClientPort: Send + Sync {
    fn open_session<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<Box<dyn EdrSession>, DomainError>>;
}
