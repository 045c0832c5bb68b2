use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use domain::auth::entity::Credentials;
use domain::auth::error::AuthError;
use ports::secondary::credentials_provider::CredentialsProvider;

/// Decodes backend credentials from an HS256 JWT signed with the
/// shared relay secret.
///
/// The claims payload carries the credentials directly, so no
/// registered claims are required and expiry is not enforced; the
/// signature check is the whole gate.
pub struct JwtCredentialsProvider {
    decoding_key: DecodingKey,
}

impl JwtCredentialsProvider {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl CredentialsProvider for JwtCredentialsProvider {
    fn credentials(&self, token: &str) -> Result<Credentials, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = false;

        let data = decode::<Credentials>(token, &self.decoding_key, &validation)
            .map_err(|err| AuthError::TokenInvalid(err.to_string()))?;
        Ok(data.claims)
    }
}
