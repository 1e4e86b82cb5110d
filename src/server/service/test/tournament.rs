use super::*;

/// Tests transformation of the player's events into tournaments.
///
/// Expected: Ok with one tournament per event and the owner name joined
#[tokio::test]
async fn lists_tournaments_with_owner() {
    let test = TestBuilder::new()
        .with_events(vec![
            fixture::event::record("evt1"),
            fixture::event::record_builder()
                .id("evt2")
                .owner(None, Some("Solo"))
                .build(),
        ])
        .build()
        .await
        .unwrap();
    let client = upstream_client(test.base_url());

    let tournaments = TournamentService::new(&client).list(&token()).await.unwrap();

    assert_eq!(tournaments.len(), 2);
    assert_eq!(tournaments[0].id.as_deref(), Some("evt1"));
    assert_eq!(tournaments[0].owner, "Olive Owner");
    assert_eq!(tournaments[0].location.as_deref(), Some("Test Hall"));
    assert_eq!(tournaments[0].players, Some(16));
    assert_eq!(tournaments[1].owner, "undefined Solo");
}

/// Tests propagation of an upstream rejection.
///
/// Expected: Err(AppError::UpstreamErr) with the upstream status
#[tokio::test]
async fn propagates_upstream_error() {
    let test = TestBuilder::new()
        .with_events_response(Stub::failure(401, json!({ "message": "Unauthorized" })))
        .build()
        .await
        .unwrap();
    let client = upstream_client(test.base_url());

    let err = TournamentService::new(&client).list(&token()).await.unwrap_err();

    assert_upstream_status(err, 401);
}
