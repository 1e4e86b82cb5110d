//! Response shapes served to the browser client.
//!
//! These DTOs are the client-friendly schema the proxy produces from upstream records. They are
//! built by the transformers in `server::model` and serialized as camelCase JSON.

pub mod api;
pub mod pairing;
pub mod roster;
pub mod tournament;
