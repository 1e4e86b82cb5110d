use super::*;

/// Tests aggregation of a tournament's army lists.
///
/// Expected: 200 OK with the rosters of the players who submitted a list
#[tokio::test]
async fn returns_rosters() {
    let upstream = TestBuilder::new()
        .with_players(
            "evt1",
            vec![
                fixture::player::with_list("A"),
                fixture::player::without_list("p2"),
                fixture::player::with_list("B"),
            ],
        )
        .with_army_list(
            "A",
            fixture::army_list::record_builder("A")
                .user(Some("Jane"), None)
                .faction(None)
                .build(),
        )
        .with_army_list("B", fixture::army_list::record("B"))
        .build()
        .await
        .unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy.get("/api/lists?token=abc&id=evt1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "name": "undefined Jane", "list": "List A" },
            { "name": "B Player", "faction": "Necrons", "list": "List B" }
        ])
    );
}

/// Tests a request without the tournament id.
///
/// Expected: 400 Bad Request and no upstream call
#[tokio::test]
async fn rejects_missing_tournament_id() {
    let upstream = TestBuilder::new().build().await.unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy.get("/api/lists?token=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Tournament id not provided" }));
    assert_eq!(upstream.request_count(), 0);
}

/// Tests a tournament whose player list cannot be fetched.
///
/// Expected: upstream status with the upstream body as `details`
#[tokio::test]
async fn forwards_player_fetch_failure() {
    let upstream = TestBuilder::new()
        .with_players_response("evt1", Stub::failure(403, json!({ "message": "Forbidden" })))
        .build()
        .await
        .unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy.get("/api/lists?token=abc&id=evt1").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["details"], json!({ "message": "Forbidden" }));
}

/// Tests that individual army-list failures do not fail the request.
///
/// Expected: 200 OK with an empty list
#[tokio::test]
async fn returns_empty_when_every_list_fails() {
    let upstream = TestBuilder::new()
        .with_players("evt1", vec![fixture::player::with_list("gone")])
        .build()
        .await
        .unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy.get("/api/lists?token=abc&id=evt1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Tests a query string that cannot be decoded into the roster parameters.
///
/// Expected: 400 Bad Request in the `{error}` envelope and no upstream call
#[tokio::test]
async fn rejects_undecodable_query_with_envelope() {
    let upstream = TestBuilder::new().build().await.unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy.get("/api/lists?token=abc&id=evt1&id=evt2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("duplicate field")));
    assert_eq!(upstream.request_count(), 0);
}
