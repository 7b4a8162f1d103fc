//! Request handlers.

pub mod cache;
pub mod health;
pub mod insight;
pub mod stats;

use axum::Json;
use axum::http::StatusCode;
use devpulse_core::Error;
use serde::Serialize;

/// JSON error envelope returned by every failing endpoint.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) type ErrorResponse = (StatusCode, Json<ErrorBody>);

pub(crate) fn unauthorized() -> ErrorResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: "Unauthorized".to_string(),
        }),
    )
}

/// Map a pipeline error onto the wire. Only Unauthorized and upstream
/// failures are expected here; anything else is a server fault.
pub(crate) fn error_response(err: Error) -> ErrorResponse {
    let status = match err {
        Error::Unauthorized => return unauthorized(),
        Error::UpstreamFailure { .. } | Error::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}
