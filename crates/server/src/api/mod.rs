mod events;
mod trips;

pub use events::*;
pub use trips::*;

use axum::http::StatusCode;
use fleetline::Error;
use tracing::debug;

pub(crate) fn status_for(err: Error) -> StatusCode {
    debug!("request failed: {err}");
    match err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) | Error::PassengerNotFound { .. } => StatusCode::NOT_FOUND,
        Error::InvalidTransition { .. } | Error::InvalidPassengerTransition { .. } => {
            StatusCode::CONFLICT
        }
        Error::Unauthorized { .. } => StatusCode::FORBIDDEN,
    }
}
