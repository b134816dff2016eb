use fleetline::bus::Event;
use serde::Serialize;
use serde_json::{Value, json};

use crate::dto::{LocationDto, TripDto};

/// The `{topic, payload}` envelope sent to every websocket subscriber.
#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub topic: &'static str,
    pub payload: Value,
}

impl EventDto {
    pub fn from(event: &Event) -> Self {
        let topic = event.topic();
        let payload = match event {
            Event::TripUpdate { trip } => json!({ "trip": TripDto::from(trip) }),
            Event::TripLocation { trip_id, location } => json!({
                "tripId": trip_id,
                "location": LocationDto::from(location),
            }),
            Event::BusProximity {
                trip_id,
                stop_name,
                message,
                timestamp,
            } => json!({
                "tripId": trip_id,
                "stopName": stop_name.to_string(),
                "message": message,
                "timestamp": timestamp,
            }),
        };
        Self { topic, payload }
    }
}
