use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PairingDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<i64>,
    pub first_player: String,
    pub second_player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_player_faction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_player_faction: Option<String>,
    pub first_player_points: i64,
    pub second_player_points: i64,
}
