use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fleetline::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

impl LocationDto {
    pub fn from(coordinate: &Coordinate) -> Self {
        Self {
            lat: coordinate.latitude,
            lng: coordinate.longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedLocationDto {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: DateTime<Utc>,
}

impl TrackedLocationDto {
    pub fn from(location: &TrackedLocation) -> Self {
        Self {
            lat: location.coordinate.latitude,
            lng: location.coordinate.longitude,
            timestamp: location.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub name: String,
    pub coordinates: Option<LocationDto>,
    pub order: u32,
    pub is_reached: bool,
}

impl StopDto {
    pub fn from(stop: &Stop) -> Self {
        Self {
            name: stop.name.to_string(),
            coordinates: stop.coordinate.as_ref().map(LocationDto::from),
            order: stop.order,
            is_reached: stop.is_reached,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDto {
    pub student_id: Uuid,
    pub pickup_point: Option<String>,
    pub drop_point: Option<String>,
    pub status: PassengerStatus,
    pub pickup_time: Option<DateTime<Utc>>,
    pub drop_time: Option<DateTime<Utc>>,
}

impl PassengerDto {
    pub fn from(passenger: &Passenger) -> Self {
        Self {
            student_id: passenger.student_id,
            pickup_point: passenger.pickup_point.as_ref().map(|p| p.to_string()),
            drop_point: passenger.drop_point.as_ref().map(|p| p.to_string()),
            status: passenger.status,
            pickup_time: passenger.pickup_time,
            drop_time: passenger.drop_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub id: Uuid,
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub direction: Direction,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub status: TripStatus,
    pub current_location: Option<TrackedLocationDto>,
    pub stops: Vec<StopDto>,
    pub passengers: Vec<PassengerDto>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
}

impl TripDto {
    pub fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            route_id: trip.route_id,
            vehicle_id: trip.vehicle_id,
            driver_id: trip.driver_id,
            direction: trip.direction,
            scheduled_date: trip.scheduled_date,
            scheduled_time: trip.scheduled_time,
            status: trip.status,
            current_location: trip.current_location.as_ref().map(TrackedLocationDto::from),
            stops: trip.stops.iter().map(StopDto::from).collect(),
            passengers: trip.passengers.iter().map(PassengerDto::from).collect(),
            actual_start_time: trip.actual_start_time,
            actual_end_time: trip.actual_end_time,
        }
    }
}
