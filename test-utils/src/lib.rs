//! Rosterboard Test Utils
//!
//! Provides shared testing utilities for the rosterboard proxy. This crate offers a builder
//! pattern for spinning up an in-process mock of the upstream tournament API, preloaded with
//! fixture records, and a context that records every request the mock receives.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the mock upstream responses
//! - **TestContext**: Running mock upstream with its base URL and request log
//! - **fixture**: Upstream JSON records with sensible defaults
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_rosters() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_players("evt1", vec![fixture::player::with_list("A")])
//!         .with_army_list("A", fixture::army_list::record("A"))
//!         .build()
//!         .await?;
//!
//!     let base_url = test.base_url();
//!     // Point the upstream client at base_url...
//!
//!     assert_eq!(test.requests_to("/armylists").len(), 1);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod mock;
