use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fleetline::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::LocationDto;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStopRequest {
    pub name: String,
    pub coordinates: Option<LocationDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassengerRequest {
    pub student_id: Uuid,
    pub pickup_point: Option<String>,
    pub drop_point: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub direction: Direction,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    #[serde(default)]
    pub stops: Vec<CreateStopRequest>,
    #[serde(default)]
    pub passengers: Vec<CreatePassengerRequest>,
}

impl CreateTripRequest {
    pub fn into_spec(self) -> TripSpec {
        TripSpec {
            route_id: self.route_id,
            vehicle_id: self.vehicle_id,
            driver_id: self.driver_id,
            direction: self.direction,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            stops: self
                .stops
                .into_iter()
                .map(|stop| StopSpec {
                    name: stop.name.into(),
                    coordinate: stop.coordinates.map(|c| Coordinate {
                        latitude: c.lat,
                        longitude: c.lng,
                    }),
                })
                .collect(),
            passengers: self
                .passengers
                .into_iter()
                .map(|passenger| PassengerSpec {
                    student_id: passenger.student_id,
                    pickup_point: passenger.pickup_point.map(Into::into),
                    drop_point: passenger.drop_point.map(Into::into),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRequest {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerAction {
    Pickup,
    Drop,
    Absent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PassengerActionRequest {
    pub action: PassengerAction,
}
