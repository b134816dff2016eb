pub mod bus;
pub mod engine;
pub mod error;
pub mod geofence;
pub mod query;
pub mod repository;
pub mod shared;
pub mod trip;

pub use error::Error;

pub mod prelude {
    pub use crate::bus::{Event, NotificationBus, NullBus};
    pub use crate::engine::{Config, IngestOutcome, PassengerSpec, StopSpec, Tracker, TripSpec};
    pub use crate::error::Error;
    pub use crate::query::{RefDirectory, TripDetails, TripFilter, TripQuery};
    pub use crate::repository::{MemoryStore, TripStore};
    pub use crate::shared::geo::{Coordinate, Distance};
    pub use crate::trip::{
        Direction, Passenger, PassengerStatus, Stop, TrackedLocation, Trip, TripStatus,
    };
}
