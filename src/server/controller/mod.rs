//! HTTP request handlers.
//!
//! Controllers validate query parameters, call the matching service and wrap the resulting
//! DTOs in JSON responses. Missing parameters are rejected before any upstream call is made.

pub mod health;
pub mod pairing;
pub mod roster;
pub mod tournament;

#[cfg(test)]
mod test;
