//! HTTP API surface for DevPulse.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
