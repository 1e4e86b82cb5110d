//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by the
//! request handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It holds no mutable data: requests never
//! share anything but immutable configuration and the pooled HTTP client.

use crate::server::{data::upstream::UpstreamClient, util::throttle::Throttle};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `UpstreamClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `Throttle` is a `Copy` duration wrapper
#[derive(Clone)]
pub struct AppState {
    /// Authenticated client for the upstream tournament API.
    pub upstream: UpstreamClient,

    /// Pacing applied between calls of a roster aggregation job.
    pub throttle: Throttle,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `upstream` - Client for the upstream tournament API
    /// - `throttle` - Flat delay used by the roster pipeline
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(upstream: UpstreamClient, throttle: Throttle) -> Self {
        Self { upstream, throttle }
    }
}
