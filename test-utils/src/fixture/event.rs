//! Upstream event fixtures.

use serde_json::{json, Map, Value};

/// Default test event name.
pub const DEFAULT_NAME: &str = "Test Open";

/// Default owner first name.
pub const DEFAULT_OWNER_FIRST_NAME: &str = "Olive";

/// Default owner last name.
pub const DEFAULT_OWNER_LAST_NAME: &str = "Owner";

/// Creates an upstream event record with default values.
///
/// # Default Values
/// - name: `"Test Open"`, locationName: `"Test Hall"`, ended: `false`
/// - checkedInPlayers: `16`, numTickets: `20`, numberOfRounds: `3`
/// - owner: `"Olive"` / `"Owner"`
/// - eventDate / eventEndDate: fixed ISO timestamps, no currentRound
///
/// # Arguments
/// - `id` - Event id
///
/// # Returns
/// - `Value` - Upstream event JSON object
pub fn record(id: &str) -> Value {
    record_builder().id(id).build()
}

/// Creates an event record builder for customization.
pub fn record_builder() -> EventRecordBuilder {
    EventRecordBuilder::default()
}

/// Builder for creating customized upstream event records.
pub struct EventRecordBuilder {
    id: String,
    name: String,
    owner_first_name: Option<String>,
    owner_last_name: Option<String>,
    current_round: Option<i64>,
}

impl Default for EventRecordBuilder {
    fn default() -> Self {
        Self {
            id: "event-1".to_string(),
            name: DEFAULT_NAME.to_string(),
            owner_first_name: Some(DEFAULT_OWNER_FIRST_NAME.to_string()),
            owner_last_name: Some(DEFAULT_OWNER_LAST_NAME.to_string()),
            current_round: None,
        }
    }
}

impl EventRecordBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owner's name halves; `None` omits that field from the record.
    pub fn owner(mut self, first_name: Option<&str>, last_name: Option<&str>) -> Self {
        self.owner_first_name = first_name.map(str::to_string);
        self.owner_last_name = last_name.map(str::to_string);
        self
    }

    pub fn current_round(mut self, round: i64) -> Self {
        self.current_round = Some(round);
        self
    }

    /// Builds the upstream event JSON object.
    pub fn build(self) -> Value {
        let mut record = Map::new();
        record.insert("id".into(), json!(self.id));
        record.insert("name".into(), json!(self.name));
        record.insert("locationName".into(), json!("Test Hall"));
        record.insert("ended".into(), json!(false));
        record.insert("checkedInPlayers".into(), json!(16));
        record.insert("numTickets".into(), json!(20));
        record.insert("gameSystemName".into(), json!("Warhammer 40,000"));
        record.insert("numberOfRounds".into(), json!(3));
        record.insert("eventDate".into(), json!("2025-05-10T09:00:00.000Z"));
        record.insert("eventEndDate".into(), json!("2025-05-11T18:00:00.000Z"));

        if let Some(first_name) = self.owner_first_name {
            record.insert("ownerFirstName".into(), json!(first_name));
        }
        if let Some(last_name) = self.owner_last_name {
            record.insert("ownerLastName".into(), json!(last_name));
        }
        if let Some(round) = self.current_round {
            record.insert("currentRound".into(), json!(round));
        }

        Value::Object(record)
    }
}
