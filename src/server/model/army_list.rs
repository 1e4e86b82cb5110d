use serde::Deserialize;

use crate::{
    model::roster::RosterDto,
    server::{
        model::user::{Army, UserRef},
        util::{id, lenient},
    },
};

/// One upstream army list, fetched individually by id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmyList {
    #[serde(default, deserialize_with = "id::deserialize_optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub user: Option<UserRef>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub army: Option<Army>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub army_list_text: Option<String>,
}

impl ArmyList {
    pub fn into_dto(self) -> RosterDto {
        RosterDto {
            name: UserRef::display_name(self.user.as_ref()),
            faction: Army::faction(self.army.as_ref()),
            list: self.army_list_text,
        }
    }
}
