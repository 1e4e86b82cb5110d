//! Upstream JSON records for tests.
//!
//! This module contains fixture functions that create upstream records as `serde_json::Value`
//! in the shape the upstream tournament API returns them. Feed them to the mock upstream via
//! `TestBuilder`, or decode them directly in unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Record with defaults
//! let event = fixture::event::record("evt1");
//!
//! // Record with custom fields
//! let pairing = fixture::pairing::record_builder()
//!     .table(3)
//!     .first_points(None)
//!     .build();
//! ```

pub mod army_list;
pub mod event;
pub mod pairing;
pub mod player;
