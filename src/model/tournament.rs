use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_tickets: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_system_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_rounds: Option<i64>,
    /// "<first> <last>" of the event owner, with a placeholder for a missing half.
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_round: Option<i64>,
}
