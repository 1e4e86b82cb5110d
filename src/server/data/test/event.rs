use super::*;

/// Tests decoding of the player's events, skipping null entries.
///
/// Expected: Ok with the non-null events in upstream order
#[tokio::test]
async fn returns_events_in_order_without_nulls() {
    let test = TestBuilder::new()
        .with_events(vec![
            fixture::event::record("evt1"),
            json!(null),
            fixture::event::record_builder().id("evt2").current_round(2).build(),
        ])
        .build()
        .await
        .unwrap();
    let client = upstream_client(test.base_url());

    let events = EventRepository::new(&client)
        .get_player_events(&token())
        .await
        .unwrap();

    let ids: Vec<_> = events.iter().map(|e| e.id.as_deref()).collect();
    assert_eq!(ids, vec![Some("evt1"), Some("evt2")]);
    assert_eq!(events[1].current_round, Some(2));
    assert_eq!(events[0].owner_first_name.as_deref(), Some("Olive"));
}

/// Tests an upstream envelope without a `data` field.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn treats_missing_data_as_empty() {
    let test = TestBuilder::new()
        .with_events_response(Stub::record(json!({})))
        .build()
        .await
        .unwrap();
    let client = upstream_client(test.base_url());

    let events = EventRepository::new(&client)
        .get_player_events(&token())
        .await
        .unwrap();

    assert!(events.is_empty());
}
