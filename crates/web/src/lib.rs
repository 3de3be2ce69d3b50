//! Rolodex web server library.
//!
//! Exposes the building blocks (config, state, error handling, rendering,
//! routes) so the integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;
