//! Typed accessors for the upstream data sources, each independently
//! failable. Mandatory sources abort the pipeline; optional ones
//! degrade to documented defaults.

mod client;
mod config;
mod models;

pub use client::GithubClient;
pub use config::GithubConfig;
