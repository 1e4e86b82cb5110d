//! Upstream army list fixtures.

use serde_json::{json, Map, Value};

/// Default faction of fixture army lists.
pub const DEFAULT_FACTION: &str = "Necrons";

/// Creates an army list record with default values.
///
/// # Default Values
/// - user: firstName `"Player"`, lastName = `list_id`
/// - army.name: `"Necrons"`
/// - armyListText: `"List <list_id>"`
///
/// # Arguments
/// - `list_id` - Army list id
///
/// # Returns
/// - `Value` - Upstream army list JSON object
pub fn record(list_id: &str) -> Value {
    record_builder(list_id).build()
}

/// Creates an army list record builder for customization.
pub fn record_builder(list_id: &str) -> ArmyListRecordBuilder {
    ArmyListRecordBuilder {
        id: list_id.to_string(),
        first_name: Some("Player".to_string()),
        last_name: Some(list_id.to_string()),
        faction: Some(DEFAULT_FACTION.to_string()),
        text: format!("List {}", list_id),
    }
}

/// Builder for creating customized upstream army list records.
pub struct ArmyListRecordBuilder {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    faction: Option<String>,
    text: String,
}

impl ArmyListRecordBuilder {
    /// Sets the owner's name halves; `None` omits that field from the user object.
    pub fn user(mut self, first_name: Option<&str>, last_name: Option<&str>) -> Self {
        self.first_name = first_name.map(str::to_string);
        self.last_name = last_name.map(str::to_string);
        self
    }

    /// Sets the faction; `None` omits the `army` object.
    pub fn faction(mut self, faction: Option<&str>) -> Self {
        self.faction = faction.map(str::to_string);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builds the upstream army list JSON object.
    pub fn build(self) -> Value {
        let mut user = Map::new();
        if let Some(first_name) = self.first_name {
            user.insert("firstName".into(), json!(first_name));
        }
        if let Some(last_name) = self.last_name {
            user.insert("lastName".into(), json!(last_name));
        }

        let mut record = Map::new();
        record.insert("id".into(), json!(self.id));
        record.insert("user".into(), Value::Object(user));
        record.insert("armyListText".into(), json!(self.text));
        if let Some(faction) = self.faction {
            record.insert("army".into(), json!({ "name": faction }));
        }

        Value::Object(record)
    }
}
