use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization token is missing")]
    TokenMissing,

    #[error("invalid authorization token: {0}")]
    TokenInvalid(String),
}
