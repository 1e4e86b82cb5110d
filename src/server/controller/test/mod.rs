use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::unreachable_base_url, fixture, mock::Stub};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::server::{config::Config, router::app, startup::setup_state};

mod pairing;
mod roster;

/// Proxy instance serving the full application on an ephemeral local port.
struct TestProxy {
    base_url: String,
    server: JoinHandle<()>,
}

impl TestProxy {
    /// Starts the proxy against the given upstream with a 1 ms throttle.
    async fn start(upstream_base_url: &str) -> Self {
        let upstream_base_url = upstream_base_url.to_string();
        let config = Config::from_lookup(move |name| match name {
            "UPSTREAM_BASE_URL" => Some(upstream_base_url.clone()),
            "THROTTLE_INTERVAL_MS" => Some("1".to_string()),
            _ => None,
        })
        .unwrap();
        let state = setup_state(&config).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            server,
        }
    }

    /// Sends a GET to the proxy and returns the status with the decoded JSON body.
    async fn get(&self, path_and_query: &str) -> (StatusCode, Value) {
        let response = reqwest::get(format!("{}{}", self.base_url, path_and_query))
            .await
            .unwrap();
        let status = response.status();
        let body = response.json::<Value>().await.unwrap();
        (status, body)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.server.abort();
    }
}
