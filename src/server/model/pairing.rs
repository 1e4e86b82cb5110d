use serde::Deserialize;

use crate::{
    model::pairing::PairingDto,
    server::{
        model::user::{Army, UserRef},
        util::{id, lenient},
    },
};

/// One side of an upstream pairing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PairingPlayer {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub user: Option<UserRef>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub army: Option<Army>,
}

/// Game result of one side of an upstream pairing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PairingGame {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub points: Option<i64>,
}

/// One upstream pairing for a tournament round.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    #[serde(default, deserialize_with = "id::deserialize_optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub table: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub player1: Option<PairingPlayer>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub player2: Option<PairingPlayer>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub player1_game: Option<PairingGame>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub player2_game: Option<PairingGame>,
}

impl Pairing {
    /// Converts the upstream pairing into the client-facing matchup.
    ///
    /// Points default to 0 when the game result is absent.
    pub fn into_dto(self) -> PairingDto {
        let first = self.player1.unwrap_or_default();
        let second = self.player2.unwrap_or_default();

        PairingDto {
            id: self.id,
            table: self.table,
            first_player: UserRef::display_name(first.user.as_ref()),
            second_player: UserRef::display_name(second.user.as_ref()),
            first_player_faction: Army::faction(first.army.as_ref()),
            second_player_faction: Army::faction(second.army.as_ref()),
            first_player_points: points(self.player1_game.as_ref()),
            second_player_points: points(self.player2_game.as_ref()),
        }
    }
}

fn points(game: Option<&PairingGame>) -> i64 {
    game.and_then(|g| g.points).unwrap_or(0)
}
