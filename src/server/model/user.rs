use serde::Deserialize;

use crate::server::util::{lenient, name::join_name};

/// Person embedded in upstream player, army-list and pairing records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub last_name: Option<String>,
}

impl UserRef {
    /// Display name in the "lastName firstName" order used by rosters and pairings.
    pub fn display_name(user: Option<&UserRef>) -> String {
        join_name(
            user.and_then(|u| u.last_name.as_deref()),
            user.and_then(|u| u.first_name.as_deref()),
        )
    }
}

/// Faction ("army") a list or pairing player is playing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Army {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
}

impl Army {
    pub fn faction(army: Option<&Army>) -> Option<String> {
        army.and_then(|a| a.name.clone())
    }
}
