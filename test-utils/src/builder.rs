use serde_json::Value;
use tokio::net::TcpListener;

use crate::{
    context::TestContext,
    error::TestError,
    mock::{self, MockUpstream, RequestLog, Stub, BASE_PATH},
};

/// Builder for creating test contexts backed by a mock upstream API.
///
/// Provides a fluent interface for configuring what each upstream route returns. Routes
/// that are not configured answer with an empty `{ "data": [] }` list, except army lists,
/// which answer 404. Call `build()` to start the mock server.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture, mock::Stub};
///
/// let test = TestBuilder::new()
///     .with_players("evt1", vec![fixture::player::with_list("A")])
///     .with_army_list_response("A", Stub::failure(429, json!({ "message": "slow down" })))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Responses the mock serves once started.
    upstream: MockUpstream,
}

impl TestBuilder {
    /// Creates a new test builder with no routes configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance serving empty lists
    pub fn new() -> Self {
        Self {
            upstream: MockUpstream::default(),
        }
    }

    /// Serves the given records from `GET /events`.
    ///
    /// # Arguments
    /// - `events` - Upstream event records
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_events(self, events: Vec<Value>) -> Self {
        self.with_events_response(Stub::list(events))
    }

    /// Serves an arbitrary response from `GET /events`.
    pub fn with_events_response(mut self, stub: Stub) -> Self {
        self.upstream.events = Some(stub);
        self
    }

    /// Serves the given records from `GET /players?eventId=<event_id>`.
    ///
    /// # Arguments
    /// - `event_id` - Event the players are registered for
    /// - `players` - Upstream player records
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_players(self, event_id: impl Into<String>, players: Vec<Value>) -> Self {
        self.with_players_response(event_id, Stub::list(players))
    }

    /// Serves an arbitrary response from `GET /players?eventId=<event_id>`.
    pub fn with_players_response(mut self, event_id: impl Into<String>, stub: Stub) -> Self {
        self.upstream.players.insert(event_id.into(), stub);
        self
    }

    /// Serves the given record from `GET /armylists/<list_id>`.
    ///
    /// # Arguments
    /// - `list_id` - Army list id
    /// - `army_list` - Upstream army list record
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_army_list(self, list_id: impl Into<String>, army_list: Value) -> Self {
        self.with_army_list_response(list_id, Stub::record(army_list))
    }

    /// Serves an arbitrary response from `GET /armylists/<list_id>`.
    pub fn with_army_list_response(mut self, list_id: impl Into<String>, stub: Stub) -> Self {
        self.upstream.army_lists.insert(list_id.into(), stub);
        self
    }

    /// Serves the given records from `GET /events/<event_id>/pairings?round=<round>`.
    ///
    /// # Arguments
    /// - `event_id` - Event the pairings belong to
    /// - `round` - Round number
    /// - `pairings` - Upstream pairing records
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_pairings(self, event_id: impl Into<String>, round: u32, pairings: Vec<Value>) -> Self {
        self.with_pairings_response(event_id, round, Stub::list(pairings))
    }

    /// Serves an arbitrary response from `GET /events/<event_id>/pairings?round=<round>`.
    pub fn with_pairings_response(
        mut self,
        event_id: impl Into<String>,
        round: u32,
        stub: Stub,
    ) -> Self {
        self.upstream
            .pairings
            .insert((event_id.into(), round.to_string()), stub);
        self
    }

    /// Starts the mock upstream on an ephemeral local port.
    ///
    /// The server runs on the current tokio runtime until the returned context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock upstream
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let log = RequestLog::default();
        let app = mock::router(self.upstream, log.clone());

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(TestContext::new(
            format!("http://{}{}", addr, BASE_PATH),
            log,
            server,
        ))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
