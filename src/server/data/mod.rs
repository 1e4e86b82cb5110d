//! Upstream repository layer.
//!
//! This module contains the authenticated client for the upstream tournament API and one
//! repository per upstream resource. Repositories know the upstream paths and query
//! parameters and return decoded upstream records; transforming them into DTOs is left to the
//! service layer.

pub mod army_list;
pub mod event;
pub mod pairing;
pub mod player;
pub mod upstream;

/// Page size requested from the upstream collection endpoints. No further pages are fetched.
pub const PAGE_LIMIT: &str = "100";

#[cfg(test)]
mod test;
