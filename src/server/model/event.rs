//! Upstream event records.

use serde::Deserialize;

use crate::{
    model::tournament::TournamentDto,
    server::util::{id, lenient, name::join_name},
};

/// One upstream event, the source of a [`TournamentDto`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "id::deserialize_optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub ended: Option<bool>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub checked_in_players: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub num_tickets: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub game_system_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub number_of_rounds: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub owner_first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub owner_last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub event_end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub current_round: Option<i64>,
}

impl Event {
    /// Converts the upstream event into the client-facing tournament.
    ///
    /// `owner` is always "<first> <last>", with a placeholder for a missing half.
    pub fn into_dto(self) -> TournamentDto {
        TournamentDto {
            owner: join_name(
                self.owner_first_name.as_deref(),
                self.owner_last_name.as_deref(),
            ),
            id: self.id,
            name: self.name,
            location: self.location_name,
            ended: self.ended,
            players: self.checked_in_players,
            num_tickets: self.num_tickets,
            game_system_name: self.game_system_name,
            number_of_rounds: self.number_of_rounds,
            event_date: self.event_date,
            event_end_date: self.event_end_date,
            current_round: self.current_round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::ListEnvelope;
    use serde_json::json;

    fn event(value: serde_json::Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    /// Tests mapping of a complete upstream event.
    ///
    /// Verifies renamed fields (`locationName` -> `location`, `checkedInPlayers` -> `players`)
    /// and the derived owner.
    ///
    /// Expected: every output field populated from its upstream counterpart
    #[test]
    fn maps_complete_event() {
        let dto = event(json!({
            "id": "evt1",
            "name": "Spring Open",
            "locationName": "Hall A",
            "ended": false,
            "checkedInPlayers": 24,
            "numTickets": 32,
            "gameSystemName": "Warhammer 40,000",
            "numberOfRounds": 5,
            "ownerFirstName": "Ann",
            "ownerLastName": "Lee",
            "eventDate": "2025-04-01T09:00:00Z",
            "eventEndDate": "2025-04-02T18:00:00Z",
            "currentRound": 2
        }))
        .into_dto();

        assert_eq!(
            dto,
            TournamentDto {
                id: Some("evt1".to_string()),
                name: Some("Spring Open".to_string()),
                location: Some("Hall A".to_string()),
                ended: Some(false),
                players: Some(24),
                num_tickets: Some(32),
                game_system_name: Some("Warhammer 40,000".to_string()),
                number_of_rounds: Some(5),
                owner: "Ann Lee".to_string(),
                event_date: Some("2025-04-01T09:00:00Z".to_string()),
                event_end_date: Some("2025-04-02T18:00:00Z".to_string()),
                current_round: Some(2),
            }
        );
    }

    /// Tests that a sparse event never fails and keeps the owner quirk.
    ///
    /// Expected: absent fields stay `None`, owner carries the placeholder
    #[test]
    fn maps_sparse_event() {
        let dto = event(json!({ "id": 7, "ownerLastName": "Lee" })).into_dto();

        assert_eq!(dto.id.as_deref(), Some("7"));
        assert_eq!(dto.owner, "undefined Lee");
        assert!(dto.name.is_none());
        assert!(dto.current_round.is_none());
    }

    /// Tests that absent optional fields are omitted from the serialized output.
    #[test]
    fn omits_absent_fields_when_serialized() {
        let value = serde_json::to_value(event(json!({ "name": "Cup" })).into_dto()).unwrap();

        assert_eq!(value, json!({ "name": "Cup", "owner": "undefined undefined" }));
    }

    /// Tests that a field with an unexpected JSON type does not reject the collection.
    ///
    /// Verifies that one event carrying `checkedInPlayers` as a string still decodes, with
    /// only that field dropped, and that its neighbours are unaffected.
    ///
    /// Expected: both events decoded, the string count reported as absent
    #[test]
    fn tolerates_mistyped_fields_in_collection() {
        let envelope: ListEnvelope<Event> = serde_json::from_value(json!({
            "data": [
                { "id": "evt1", "checkedInPlayers": 16 },
                { "id": "evt2", "name": "Cup", "checkedInPlayers": "16", "ended": "no" }
            ]
        }))
        .unwrap();
        let dtos: Vec<TournamentDto> = envelope
            .into_records()
            .into_iter()
            .map(Event::into_dto)
            .collect();

        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].players, Some(16));
        assert_eq!(dtos[1].players, None);
        assert_eq!(dtos[1].ended, None);
        assert_eq!(dtos[1].name.as_deref(), Some("Cup"));
    }

    /// Tests transformer purity.
    ///
    /// Expected: converting clones of the same record yields identical output
    #[test]
    fn transform_is_idempotent() {
        let record = event(json!({ "id": "a", "ownerFirstName": "Ann", "numTickets": 3 }));

        assert_eq!(record.clone().into_dto(), record.into_dto());
    }
}
