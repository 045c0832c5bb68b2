use domain::auth::entity::Credentials;
use domain::auth::error::AuthError;

/// Extracts backend credentials from the bearer material a request
/// carries. Pure decode, no I/O, so the port stays synchronous.
pub trait CredentialsProvider: Send + Sync {
    fn credentials(&self, token: &str) -> Result<Credentials, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_dyn_compatible(_provider: &dyn CredentialsProvider) {}
}
