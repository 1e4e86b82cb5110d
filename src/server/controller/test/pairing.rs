use super::*;

/// Tests listing a round's pairings.
///
/// Expected: 200 OK with missing points reported as 0
#[tokio::test]
async fn returns_round_pairings() {
    let upstream = TestBuilder::new()
        .with_pairings(
            "evt1",
            3,
            vec![fixture::pairing::record_builder()
                .id("p1")
                .table(7)
                .first_points(None)
                .build()],
        )
        .build()
        .await
        .unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy
        .get("/api/round?token=abc&tournamentId=evt1&round=3")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": "p1",
            "table": 7,
            "firstPlayer": "Doe Jane",
            "secondPlayer": "Roe John",
            "firstPlayerFaction": "Necrons",
            "secondPlayerFaction": "Orks",
            "firstPlayerPoints": 0,
            "secondPlayerPoints": 40
        }])
    );
}

/// Tests validation of the round parameters.
///
/// Expected: 400 Bad Request for a missing tournament id, missing round or
/// non-numeric round, and no upstream call
#[tokio::test]
async fn rejects_invalid_parameters() {
    let upstream = TestBuilder::new().build().await.unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy.get("/api/round?token=abc&round=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Tournament id not provided");

    let (status, body) = proxy.get("/api/round?token=abc&tournamentId=evt1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Round not provided");

    let (status, _) = proxy
        .get("/api/round?token=abc&tournamentId=evt1&round=first")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(upstream.request_count(), 0);
}

/// Tests a round where one pairing carries fractional points.
///
/// Expected: 200 OK with every pairing, the unusable points reported as 0
#[tokio::test]
async fn tolerates_fractional_points() {
    let mut odd = fixture::pairing::record("p2");
    odd["player1Game"] = json!({ "points": 12.5 });

    let upstream = TestBuilder::new()
        .with_pairings("evt1", 1, vec![fixture::pairing::record("p1"), odd])
        .build()
        .await
        .unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy
        .get("/api/round?token=abc&tournamentId=evt1&round=1")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["firstPlayerPoints"], 60);
    assert_eq!(body[1]["id"], "p2");
    assert_eq!(body[1]["firstPlayerPoints"], 0);
}

/// Tests a query string that cannot be decoded into the round parameters.
///
/// Expected: 400 Bad Request in the `{error}` envelope and no upstream call
#[tokio::test]
async fn rejects_undecodable_query_with_envelope() {
    let upstream = TestBuilder::new().build().await.unwrap();
    let proxy = TestProxy::start(upstream.base_url()).await;

    let (status, body) = proxy
        .get("/api/round?token=abc&tournamentId=evt1&round=1&round=2")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(upstream.request_count(), 0);
}
