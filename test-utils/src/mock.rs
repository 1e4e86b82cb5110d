//! In-process mock of the upstream tournament API.
//!
//! Serves the four upstream endpoints under [`BASE_PATH`] from preconfigured [`Stub`]
//! responses and records every incoming request, including those that hit no route.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::time::Instant;

/// Path prefix the mock serves the upstream API under, mirroring the real `/v1` root.
pub const BASE_PATH: &str = "/v1";

/// Canned response for one upstream route.
#[derive(Debug, Clone)]
pub enum Stub {
    /// JSON body with the given status.
    Json { status: u16, body: Value },
    /// Plain-text body with the given status.
    Text { status: u16, body: String },
}

impl Stub {
    /// Successful collection response wrapped in the upstream `{ "data": [...] }` envelope.
    pub fn list(records: Vec<Value>) -> Self {
        Self::Json {
            status: 200,
            body: json!({ "data": records }),
        }
    }

    /// Successful single-record response.
    pub fn record(record: Value) -> Self {
        Self::Json {
            status: 200,
            body: record,
        }
    }

    /// Failure response with a JSON body.
    pub fn failure(status: u16, body: Value) -> Self {
        Self::Json { status, body }
    }

    /// Failure response with a plain-text body.
    pub fn text_failure(status: u16, body: impl Into<String>) -> Self {
        Self::Text {
            status,
            body: body.into(),
        }
    }

    fn respond(&self) -> Response {
        match self {
            Self::Json { status, body } => (status_code(*status), Json(body.clone())).into_response(),
            Self::Text { status, body } => (status_code(*status), body.clone()).into_response(),
        }
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// A request received by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Full request path, including [`BASE_PATH`].
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Value of the `Authorization` header.
    pub authorization: Option<String>,
    /// Value of the `client-id` header.
    pub client_id: Option<String>,
    /// When the mock received the request.
    pub received_at: Instant,
}

impl RecordedRequest {
    /// Returns the raw (not percent-decoded) value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then(|| value.to_string())
        })
    }
}

/// Responses configured for the mock upstream.
#[derive(Debug, Default)]
pub(crate) struct MockUpstream {
    pub(crate) events: Option<Stub>,
    pub(crate) players: HashMap<String, Stub>,
    pub(crate) army_lists: HashMap<String, Stub>,
    pub(crate) pairings: HashMap<(String, String), Stub>,
}

pub(crate) type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

pub(crate) fn lock_log(log: &RequestLog) -> std::sync::MutexGuard<'_, Vec<RecordedRequest>> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn router(upstream: MockUpstream, log: RequestLog) -> Router {
    let routes = Router::new()
        .route("/events", get(events))
        .route("/players", get(players))
        .route("/armylists/{list_id}", get(army_list))
        .route("/events/{event_id}/pairings", get(pairings))
        .with_state(Arc::new(upstream));

    Router::new()
        .nest(BASE_PATH, routes)
        .layer(middleware::from_fn_with_state(log, record))
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let recorded = {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        RecordedRequest {
            path: request.uri().path().to_string(),
            query: request.uri().query().map(str::to_string),
            authorization: header("authorization"),
            client_id: header("client-id"),
            received_at: Instant::now(),
        }
    };
    lock_log(&log).push(recorded);

    next.run(request).await
}

async fn events(State(upstream): State<Arc<MockUpstream>>) -> Response {
    match &upstream.events {
        Some(stub) => stub.respond(),
        None => Stub::list(Vec::new()).respond(),
    }
}

async fn players(
    State(upstream): State<Arc<MockUpstream>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    query
        .get("eventId")
        .and_then(|event_id| upstream.players.get(event_id))
        .map(Stub::respond)
        .unwrap_or_else(|| Stub::list(Vec::new()).respond())
}

async fn army_list(
    State(upstream): State<Arc<MockUpstream>>,
    Path(list_id): Path<String>,
) -> Response {
    match upstream.army_lists.get(&list_id) {
        Some(stub) => stub.respond(),
        None => Stub::failure(404, json!({ "message": "Army list not found" })).respond(),
    }
}

async fn pairings(
    State(upstream): State<Arc<MockUpstream>>,
    Path(event_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let round = query.get("round").cloned().unwrap_or_default();

    upstream
        .pairings
        .get(&(event_id, round))
        .map(Stub::respond)
        .unwrap_or_else(|| Stub::list(Vec::new()).respond())
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
    };

    use crate::builder::TestBuilder;

    /// Sends a raw HTTP/1.1 GET and returns the full response text.
    async fn raw_get(base_url: &str, path_and_query: &str, headers: &[(&str, &str)]) -> String {
        let authority = base_url
            .trim_start_matches("http://")
            .split('/')
            .next()
            .unwrap()
            .to_string();

        let mut request = format!(
            "GET {}{} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n",
            super::BASE_PATH,
            path_and_query,
            authority
        );
        for (name, value) in headers {
            request.push_str(&format!("{}: {}\r\n", name, value));
        }
        request.push_str("\r\n");

        let mut stream = TcpStream::connect(&authority).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    /// Tests that the recording layer logs a request and still forwards it to the route.
    ///
    /// Expected: 200 response with an empty list, one recorded request with path, query
    /// and both auth headers
    #[tokio::test]
    async fn records_request_and_forwards_it() {
        let test = TestBuilder::new().build().await.unwrap();

        let response = raw_get(
            test.base_url(),
            "/events?limit=100&playerEvents=true",
            &[("Authorization", "Bearer abc"), ("client-id", "web-app")],
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains(r#"{"data":[]}"#));

        let requests = test.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/v1/events");
        assert_eq!(requests[0].query_param("limit").as_deref(), Some("100"));
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer abc"));
        assert_eq!(requests[0].client_id.as_deref(), Some("web-app"));
    }

    /// Tests the default response for an army list with no configured stub.
    ///
    /// Expected: 404 response, request still recorded
    #[tokio::test]
    async fn unknown_army_list_is_not_found() {
        let test = TestBuilder::new().build().await.unwrap();

        let response = raw_get(test.base_url(), "/armylists/missing", &[]).await;

        assert!(response.starts_with("HTTP/1.1 404"));
        assert_eq!(test.requests_to("/armylists").len(), 1);
    }
}
