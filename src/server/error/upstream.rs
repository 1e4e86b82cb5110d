use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned when the upstream API answered with a non-success status.
pub const UPSTREAM_RESPONSE_MESSAGE: &str = "Upstream API error";

/// Message returned when no usable response was obtained from the upstream API.
pub const UPSTREAM_UNREACHABLE_MESSAGE: &str = "Failed to connect to upstream API";

/// Failure of a single call to the upstream tournament API.
///
/// No retries are attempted for any variant; a failed call is final.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status.
    ///
    /// `body` is the upstream body decoded as JSON, or the raw text wrapped in a JSON
    /// string when it is not valid JSON. Forwarded to the caller as `details`.
    #[error("Upstream API responded with {status}")]
    Response {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// No response was obtained (connection refused, DNS failure, timeout, broken body).
    #[error("Failed to reach upstream API: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Upstream answered 2xx but the payload does not have the expected shape.
    #[error("Upstream API returned a malformed payload: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl UpstreamError {
    /// Upstream status code, when the upstream actually answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Unreachable(_) | Self::Malformed(_) => None,
        }
    }
}

/// Converts upstream failures into HTTP responses.
///
/// # Returns
/// - Upstream status - For `Response`, with the upstream body as `details`
/// - 500 Internal Server Error - For `Unreachable` and `Malformed`, without `details`
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("Upstream request failed: {}", self);

        match self {
            Self::Response { status, body } => (
                status,
                Json(ErrorDto::with_details(UPSTREAM_RESPONSE_MESSAGE, body)),
            )
                .into_response(),
            Self::Unreachable(_) | Self::Malformed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new(UPSTREAM_UNREACHABLE_MESSAGE)),
            )
                .into_response(),
        }
    }
}
