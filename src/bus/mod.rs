use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{shared::geo::Coordinate, trip::Trip};

pub const TOPIC_TRIP_UPDATE: &str = "trip:update";
pub const TOPIC_TRIP_LOCATION: &str = "trip:location";
pub const TOPIC_BUS_PROXIMITY: &str = "bus-proximity";

/// Events emitted by the tracking engine.
///
/// `BusProximity` fires exactly once per stop crossing: the reached flag that
/// gates it is flipped atomically against the persisted trip, so a crossing
/// can never signal twice.
#[derive(Debug, Clone)]
pub enum Event {
    /// Full trip snapshot, emitted on every lifecycle transition.
    TripUpdate { trip: Trip },
    /// Emitted on every accepted position update.
    TripLocation { trip_id: Uuid, location: Coordinate },
    /// Emitted when the vehicle first comes within range of a stop.
    BusProximity {
        trip_id: Uuid,
        stop_name: Arc<str>,
        message: String,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    pub fn proximity(trip_id: Uuid, stop_name: Arc<str>, timestamp: DateTime<Utc>) -> Self {
        let message = format!("Bus is approaching {stop_name}");
        Self::BusProximity {
            trip_id,
            stop_name,
            message,
            timestamp,
        }
    }

    pub const fn topic(&self) -> &'static str {
        match self {
            Self::TripUpdate { .. } => TOPIC_TRIP_UPDATE,
            Self::TripLocation { .. } => TOPIC_TRIP_LOCATION,
            Self::BusProximity { .. } => TOPIC_BUS_PROXIMITY,
        }
    }
}

/// Ephemeral fan-out to whoever is listening right now.
///
/// No persistence, no replay, no delivery guarantee: a subscriber that
/// connects after an event was published never receives it. Within one topic
/// events arrive in publish order. Implementations must never block the
/// publisher.
pub trait NotificationBus: Send + Sync {
    fn publish(&self, event: Event);
}

/// Bus that drops every event, for deployments without live subscribers.
#[derive(Debug, Default)]
pub struct NullBus;

impl NotificationBus for NullBus {
    fn publish(&self, _event: Event) {}
}
