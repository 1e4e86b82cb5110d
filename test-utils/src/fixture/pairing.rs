//! Upstream pairing fixtures.

use serde_json::{json, Map, Value};

/// Creates a pairing record with default values.
///
/// # Default Values
/// - table: `1`
/// - player1: Jane Doe playing Necrons, 60 points
/// - player2: John Roe playing Orks, 40 points
pub fn record(id: &str) -> Value {
    record_builder().id(id).build()
}

/// Creates a pairing record builder for customization.
pub fn record_builder() -> PairingRecordBuilder {
    PairingRecordBuilder::default()
}

/// Builder for creating customized upstream pairing records.
pub struct PairingRecordBuilder {
    id: String,
    table: i64,
    first: (String, String, String),
    second: (String, String, String),
    first_points: Option<i64>,
    second_points: Option<i64>,
}

impl Default for PairingRecordBuilder {
    fn default() -> Self {
        Self {
            id: "pairing-1".to_string(),
            table: 1,
            first: ("Jane".into(), "Doe".into(), "Necrons".into()),
            second: ("John".into(), "Roe".into(), "Orks".into()),
            first_points: Some(60),
            second_points: Some(40),
        }
    }
}

impl PairingRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn table(mut self, table: i64) -> Self {
        self.table = table;
        self
    }

    /// Sets the first player's first name, last name and faction.
    pub fn first_player(mut self, first_name: &str, last_name: &str, faction: &str) -> Self {
        self.first = (first_name.into(), last_name.into(), faction.into());
        self
    }

    /// Sets the second player's first name, last name and faction.
    pub fn second_player(mut self, first_name: &str, last_name: &str, faction: &str) -> Self {
        self.second = (first_name.into(), last_name.into(), faction.into());
        self
    }

    /// Sets the first player's points; `None` omits `player1Game`.
    pub fn first_points(mut self, points: Option<i64>) -> Self {
        self.first_points = points;
        self
    }

    /// Sets the second player's points; `None` omits `player2Game`.
    pub fn second_points(mut self, points: Option<i64>) -> Self {
        self.second_points = points;
        self
    }

    /// Builds the upstream pairing JSON object.
    pub fn build(self) -> Value {
        let side = |(first_name, last_name, faction): (String, String, String)| {
            json!({
                "user": { "firstName": first_name, "lastName": last_name },
                "army": { "name": faction }
            })
        };

        let mut record = Map::new();
        record.insert("id".into(), json!(self.id));
        record.insert("table".into(), json!(self.table));
        record.insert("player1".into(), side(self.first));
        record.insert("player2".into(), side(self.second));
        if let Some(points) = self.first_points {
            record.insert("player1Game".into(), json!({ "points": points }));
        }
        if let Some(points) = self.second_points {
            record.insert("player2Game".into(), json!({ "points": points }));
        }

        Value::Object(record)
    }
}
