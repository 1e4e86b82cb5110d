use serde::Deserialize;

use crate::server::{
    model::user::UserRef,
    util::{id, lenient},
};

/// Upstream player registration, only used to find the player's submitted army list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, deserialize_with = "id::deserialize_optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "id::deserialize_optional")]
    pub list_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub user: Option<UserRef>,
}

/// Collects the army-list ids of players that submitted a list, in player order.
pub fn extract_list_ids(players: Vec<Player>) -> Vec<String> {
    players
        .into_iter()
        .filter_map(|player| player.list_id)
        .collect()
}
