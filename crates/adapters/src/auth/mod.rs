pub mod jwt_provider;
