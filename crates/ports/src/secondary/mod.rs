pub mod credentials_provider;
pub mod edr_client;
