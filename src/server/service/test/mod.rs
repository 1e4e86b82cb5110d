use std::time::Duration;

use serde_json::json;
use test_utils::{builder::TestBuilder, context::unreachable_base_url, fixture, mock::Stub};
use tokio::time::Instant;
use url::Url;

use crate::{
    model::roster::RosterDto,
    server::{
        data::upstream::UpstreamClient,
        error::AppError,
        middleware::auth::BearerToken,
        service::{pairing::PairingService, roster::RosterService, tournament::TournamentService},
        util::throttle::Throttle,
    },
};

mod tournament;

/// Throttle interval used by pipeline tests, short enough to keep the suite fast.
const TEST_INTERVAL: Duration = Duration::from_millis(30);

fn upstream_client(base_url: &str) -> UpstreamClient {
    UpstreamClient::new(
        reqwest::Client::new(),
        Url::parse(base_url).unwrap(),
        "web-app".to_string(),
    )
}

fn token() -> BearerToken {
    BearerToken::require(Some("test-token".to_string())).unwrap()
}

/// Asserts that an `AppError` wraps an upstream response with the given status
fn assert_upstream_status(err: AppError, expected: u16) {
    match err {
        AppError::UpstreamErr(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(expected)),
        other => panic!("Expected UpstreamErr, got {:?}", other),
    }
}
