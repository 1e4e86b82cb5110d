//! Upstream player fixtures.

use serde_json::{json, Value};

/// Creates a player record that submitted the given army list.
pub fn with_list(list_id: &str) -> Value {
    json!({
        "id": format!("player-{}", list_id),
        "listId": list_id,
        "user": { "firstName": "Player", "lastName": list_id }
    })
}

/// Creates a player record with `listId: null`, i.e. no submitted list.
pub fn without_list(player_id: &str) -> Value {
    json!({
        "id": player_id,
        "listId": null,
        "user": { "firstName": "Player", "lastName": player_id }
    })
}
