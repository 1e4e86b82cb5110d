//! Server-side proxy backend.
//!
//! This module contains the complete backend: API endpoints, orchestration of upstream calls,
//! upstream data access, and infrastructure. The backend uses Axum as the web framework and
//! reqwest to reach the upstream tournament API.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, parameter validation, DTO responses
//! - **Service Layer** (`service/`) - Orchestration, including the throttled roster pipeline
//! - **Data Layer** (`data/`) - Upstream client and per-resource repositories
//! - **Model Layer** (`model/`) - Upstream record shapes and their DTO transformers
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token extraction
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (upstream client, throttle)
//! - **Startup** (`startup`) - Tracing, HTTP client and state initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the bearer token or rejects the request with 400
//! 3. **Controller** validates remaining parameters, calls service
//! 4. **Service** sequences upstream calls through the data layer
//! 5. **Data** performs authenticated upstream calls, decodes records
//! 6. **Service** converts records to DTOs and returns them
//! 7. **Controller** returns the DTOs as a JSON array

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
