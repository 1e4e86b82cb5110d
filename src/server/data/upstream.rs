//! Authenticated access to the upstream tournament API.

use axum::http::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{error::upstream::UpstreamError, middleware::auth::BearerToken};

/// Header carrying the fixed client identifier expected by the upstream API.
pub const CLIENT_ID_HEADER: &str = "client-id";

/// Client for the upstream API.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool. Every call carries
/// the caller's bearer token and the configured client identifier. No retries are performed;
/// retry policy belongs to callers.
#[derive(Clone)]
pub struct UpstreamClient {
    http_client: reqwest::Client,
    base_url: Url,
    client_id: String,
}

impl UpstreamClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// `base_url` must be able to carry path segments (validated by `Config`).
    pub fn new(http_client: reqwest::Client, base_url: Url, client_id: String) -> Self {
        Self {
            http_client,
            base_url,
            client_id,
        }
    }

    /// Performs an authenticated GET and decodes the JSON response.
    ///
    /// # Arguments
    /// - `segments` - Path segments appended to the base URL, percent-encoded individually
    /// - `query` - Query string pairs
    /// - `token` - Caller-supplied bearer token
    ///
    /// # Returns
    /// - `Ok(T)` - 2xx response decoded into `T`
    /// - `Err(UpstreamError::Response)` - Non-2xx response, with status and body
    /// - `Err(UpstreamError::Unreachable)` - No response could be obtained
    /// - `Err(UpstreamError::Malformed)` - 2xx response that does not decode into `T`
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        token: &BearerToken,
    ) -> Result<T, UpstreamError> {
        let url = self.endpoint(segments);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .query(query)
            .header(AUTHORIZATION, format!("Bearer {}", token.secret()))
            .header(CLIENT_ID_HEADER, &self.client_id)
            .send()
            .await
            .map_err(UpstreamError::Unreachable)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(UpstreamError::Unreachable)?;

        if !status.is_success() {
            return Err(UpstreamError::Response {
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body: decode_error_body(&body),
            });
        }

        serde_json::from_slice(&body).map_err(UpstreamError::Malformed)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Decodes an upstream error body as JSON, keeping it as a JSON string when it is not JSON.
fn decode_error_body(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap_or_else(|_| {
        serde_json::Value::String(String::from_utf8_lossy(body).into_owned())
    })
}
