mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;
    let state = startup::setup_state(&config)?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        "Proxy listening on http://localhost:{} (upstream {})",
        config.port,
        config.upstream_base_url
    );

    axum::serve(listener, router::app(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
