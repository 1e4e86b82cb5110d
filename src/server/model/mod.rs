//! Upstream record models and their transformers.
//!
//! This module contains the record shapes decoded from the upstream tournament API. Every field
//! is optional on input so that extraction is best-effort: a missing field becomes `None`, `0`
//! or a name placeholder instead of an error. Each record converts into its client-facing DTO
//! through a pure `into_dto` transformer.

use serde::Deserialize;

pub mod army_list;
pub mod event;
pub mod pairing;
pub mod player;
pub mod user;

/// List envelope used by the upstream collection endpoints.
///
/// `null` entries are kept as `None` here and dropped by [`ListEnvelope::into_records`], so
/// transformers never see them.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<Option<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_records(self) -> Vec<T> {
        self.data.into_iter().flatten().collect()
    }
}
