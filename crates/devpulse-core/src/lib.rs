//! Devpulse Core
//!
//! Core domain types, traits, and error handling for devpulse.
//! This crate has minimal dependencies and defines the shared vocabulary
//! used across all other crates.

pub mod error;
pub mod identity;
pub mod ports;
pub mod scoring;
pub mod snapshot;
pub mod upstream;

pub use error::{Error, Result};
pub use identity::Identity;
