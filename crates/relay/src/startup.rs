use std::path::Path;
use std::sync::Arc;

use adapters::auth::jwt_provider::JwtCredentialsProvider;
use adapters::edr::http_client::EdrHttpClient;
use adapters::http::server::run_http_server;
use adapters::http::state::AppState;
use application::enrichment::EnrichmentService;
use infrastructure::config::RelayConfig;
use infrastructure::logging::init_logging;
use ports::secondary::credentials_provider::CredentialsProvider;
use ports::secondary::edr_client::EdrClientPort;
use tracing::info;

use crate::cli::Cli;
use crate::shutdown::create_shutdown_token;

/// Run the relay startup sequence and block until shutdown.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    // ── 1. Load config ──────────────────────────────────────────────
    let config = RelayConfig::load(Path::new(&cli.config))?;

    // ── 2. Initialize logging ───────────────────────────────────────
    // CLI flags take precedence over config file
    let log_level = cli.log_level.unwrap_or(config.relay.log_level);
    let log_format = cli.log_format.unwrap_or(config.relay.log_format);
    init_logging(log_level, log_format)?;

    // Service root span — fields appear in every subsequent log entry
    let _root_span = tracing::span!(
        tracing::Level::INFO,
        "service",
        service.name = "sightrelay",
        service.version = env!("CARGO_PKG_VERSION"),
    )
    .entered();

    info!(
        config_path = %cli.config,
        log_level = log_level.as_str(),
        log_format = log_format.as_str(),
        api_url = %config.backend.api_url,
        "sightrelay starting"
    );

    // ── 3. Build the enrichment pipeline ────────────────────────────
    let client: Arc<dyn EdrClientPort> = Arc::new(EdrHttpClient::new(
        config.backend.api_url.clone(),
        config.backend.auth_url.clone(),
    )?);
    let supported_types = config.backend.supported_types();
    info!(
        supported_types = ?config.backend.observable_types,
        entities_limit = config.backend.entities_limit,
        "enrichment pipeline initialized"
    );
    let enrichment =
        EnrichmentService::new(client, supported_types, config.backend.entities_limit);

    let credentials: Arc<dyn CredentialsProvider> =
        Arc::new(JwtCredentialsProvider::new(&config.relay.secret_key));

    // ── 4. Build shared application state ───────────────────────────
    let state = Arc::new(AppState::new(enrichment, credentials));

    // ── 5. Run the HTTP server until shutdown ───────────────────────
    let shutdown_token = create_shutdown_token();
    let shutdown = {
        let token = shutdown_token.clone();
        async move { token.cancelled().await }
    };

    run_http_server(
        state,
        &config.relay.bind_address,
        config.relay.http_port,
        config.relay.swagger_ui,
        shutdown,
    )
    .await?;

    info!("sightrelay stopped");
    Ok(())
}
