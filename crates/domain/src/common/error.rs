use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The observable type has no entry in the alert resolution table.
    /// Carried back to the caller as a bad request with the type echoed.
    #[error("'{0}' type is not supported")]
    UnsupportedObservableType(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The backend call itself failed (transport error, non-success
    /// status, unparseable body). A missing/empty backend response is
    /// not this error; that means "no results found".
    #[error("backend error: {0}")]
    BackendError(String),
}
