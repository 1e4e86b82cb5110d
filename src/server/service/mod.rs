//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the upstream repository layer. Services are responsible for:
//!
//! - **Orchestration**: Sequencing upstream calls, including the throttled roster pipeline
//! - **Transformation**: Converting upstream records into client-facing DTOs
//! - **Failure Policy**: Deciding which upstream failures are fatal and which are skipped

pub mod pairing;
pub mod roster;
pub mod tournament;

#[cfg(test)]
mod test;
