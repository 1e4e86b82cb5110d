use serde_json::json;
use test_utils::{builder::TestBuilder, context::unreachable_base_url, fixture, mock::Stub};
use url::Url;

use crate::server::{
    data::{
        army_list::ArmyListRepository, event::EventRepository, pairing::PairingRepository,
        player::PlayerRepository, upstream::UpstreamClient,
    },
    error::upstream::UpstreamError,
    middleware::auth::BearerToken,
};

mod event;

const TEST_TOKEN: &str = "test-token";
const TEST_CLIENT_ID: &str = "web-app";

/// Helper function to create an upstream client pointed at a mock upstream
fn upstream_client(base_url: &str) -> UpstreamClient {
    UpstreamClient::new(
        reqwest::Client::new(),
        Url::parse(base_url).unwrap(),
        TEST_CLIENT_ID.to_string(),
    )
}

fn token() -> BearerToken {
    BearerToken::require(Some(TEST_TOKEN.to_string())).unwrap()
}
