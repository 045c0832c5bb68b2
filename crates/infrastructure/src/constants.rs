//! Shared defaults for the relay.

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/relay.yaml";

/// Default HTTP listen port.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default per-observable result ceiling.
pub const DEFAULT_ENTITIES_LIMIT: usize = 100;

/// Default EDR API root, including the `/api` path.
pub const DEFAULT_API_URL: &str = "https://api.securitycenter.windows.com/api";

/// Default OAuth2 login origin.
pub const DEFAULT_AUTH_URL: &str = "https://login.windows.net";
