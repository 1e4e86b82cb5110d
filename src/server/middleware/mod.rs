//! Request guards applied before handlers run.

pub mod auth;
