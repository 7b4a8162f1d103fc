//! Error types for devpulse.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Request errors
    #[error("Authentication required")]
    Unauthorized,

    // Upstream errors (mandatory sources only; optional sources degrade)
    #[error("Upstream source '{source}' failed: {detail}")]
    UpstreamFailure { r#source: &'static str, detail: String },

    #[error("Upstream source '{source}' returned an unexpected shape: {detail}")]
    InvalidResponse { r#source: &'static str, detail: String },

    // Infrastructure errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Construct a mandatory-source failure with diagnostic detail.
    pub fn upstream(source: &'static str, detail: impl Into<String>) -> Self {
        Error::UpstreamFailure {
            source,
            detail: detail.into(),
        }
    }

    /// Construct a shape violation for a mandatory source.
    pub fn invalid_response(source: &'static str, detail: impl Into<String>) -> Self {
        Error::InvalidResponse {
            source,
            detail: detail.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
