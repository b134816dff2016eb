use thiserror::Error;
use uuid::Uuid;

use crate::trip::{PassengerStatus, TripStatus};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("trip {0} not found")]
    NotFound(Uuid),
    #[error("no passenger with student id {student} on trip {trip}")]
    PassengerNotFound { trip: Uuid, student: Uuid },
    #[error("cannot {action} a trip that is {status}")]
    InvalidTransition {
        status: TripStatus,
        action: &'static str,
    },
    #[error("cannot {action} passenger {student} whose status is {status}")]
    InvalidPassengerTransition {
        student: Uuid,
        status: PassengerStatus,
        action: &'static str,
    },
    #[error("actor {actor} is not the assigned driver of trip {trip}")]
    Unauthorized { actor: Uuid, trip: Uuid },
}
