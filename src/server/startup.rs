use reqwest::redirect::Policy;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::upstream::UpstreamClient, error::AppError, state::AppState,
    util::throttle::Throttle,
};

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` when set and falls back to `info` for everything otherwise.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for every upstream call.
///
/// Redirects are disabled so a compromised or misconfigured upstream cannot bounce the
/// caller's bearer token to another host. A request timeout is only set when configured;
/// by default a hung upstream call waits indefinitely.
///
/// # Arguments
/// - `config` - Application configuration containing the optional upstream timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - The TLS backend or client could not be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let mut builder = reqwest::Client::builder().redirect(Policy::none());

    if let Some(timeout) = config.upstream_timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Assembles the shared application state from configuration.
pub fn setup_state(config: &Config) -> Result<AppState, AppError> {
    let http_client = setup_reqwest_client(config)?;
    let upstream = UpstreamClient::new(
        http_client,
        config.upstream_base_url.clone(),
        config.upstream_client_id.clone(),
    );

    Ok(AppState::new(
        upstream,
        Throttle::new(config.throttle_interval),
    ))
}

/// Resolves once the process receives Ctrl+C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
