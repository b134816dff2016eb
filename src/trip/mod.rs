use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::Error, shared::geo::Coordinate};

/// Lifecycle states of a trip.
///
/// `Scheduled` -> `InProgress` -> {`Completed`, `Delayed`}; `Delayed` ->
/// `Completed`; any non-terminal state -> `Cancelled`. `Completed` and
/// `Cancelled` are terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    #[default]
    Scheduled,
    InProgress,
    Delayed,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Delayed => "delayed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(value)
    }
}

impl std::str::FromStr for TripStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "scheduled" => Ok(Self::Scheduled),
            "in-progress" => Ok(Self::InProgress),
            "delayed" => Ok(Self::Delayed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(Error::Validation(format!("unknown trip status: {other}"))),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    ToSchool,
    FromSchool,
}

/// A named waypoint on the trip, copied from the route when the trip is
/// created. `is_reached` starts false and is monotonic: once flipped it is
/// never reset for the lifetime of the trip.
#[derive(Debug, Default, Clone)]
pub struct Stop {
    pub name: Arc<str>,
    pub coordinate: Option<Coordinate>,
    pub order: u32,
    pub is_reached: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerStatus {
    #[default]
    Scheduled,
    PickedUp,
    DroppedOff,
    Absent,
}

impl Display for PassengerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Scheduled => "scheduled",
            Self::PickedUp => "picked_up",
            Self::DroppedOff => "dropped_off",
            Self::Absent => "absent",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone)]
pub struct Passenger {
    pub student_id: Uuid,
    pub pickup_point: Option<Arc<str>>,
    pub drop_point: Option<Arc<str>>,
    pub status: PassengerStatus,
    pub pickup_time: Option<DateTime<Utc>>,
    pub drop_time: Option<DateTime<Utc>>,
}

/// The last accepted position report and the timestamp it carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedLocation {
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
}

/// One scheduled run of one vehicle on one route.
///
/// The trip owns its stops and passengers; route, vehicle and driver are
/// referenced by id and live with external collaborators.
#[derive(Debug, Clone)]
pub struct Trip {
    pub id: Uuid,
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub direction: Direction,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub status: TripStatus,
    pub current_location: Option<TrackedLocation>,
    pub stops: Vec<Stop>,
    pub passengers: Vec<Passenger>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
}

impl Trip {
    /// Allowed only from `Scheduled`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), Error> {
        if self.status != TripStatus::Scheduled {
            return Err(Error::InvalidTransition {
                status: self.status,
                action: "start",
            });
        }
        self.status = TripStatus::InProgress;
        self.actual_start_time = Some(now);
        Ok(())
    }

    /// Allowed only from `InProgress` or `Delayed`.
    pub fn end(&mut self, now: DateTime<Utc>) -> Result<(), Error> {
        if !matches!(self.status, TripStatus::InProgress | TripStatus::Delayed) {
            return Err(Error::InvalidTransition {
                status: self.status,
                action: "end",
            });
        }
        self.status = TripStatus::Completed;
        self.actual_end_time = Some(now);
        Ok(())
    }

    /// Allowed from any non-terminal state.
    pub fn cancel(&mut self) -> Result<(), Error> {
        if self.status.is_terminal() {
            return Err(Error::InvalidTransition {
                status: self.status,
                action: "cancel",
            });
        }
        self.status = TripStatus::Cancelled;
        Ok(())
    }

    /// Allowed only from `InProgress`. Triggered by external schedule
    /// deviation detection rather than by the tracking engine itself.
    pub fn mark_delayed(&mut self) -> Result<(), Error> {
        if self.status != TripStatus::InProgress {
            return Err(Error::InvalidTransition {
                status: self.status,
                action: "delay",
            });
        }
        self.status = TripStatus::Delayed;
        Ok(())
    }

    pub fn record_pickup(&mut self, student: Uuid, now: DateTime<Utc>) -> Result<(), Error> {
        let passenger = self.passenger_for_event(student, "pick up")?;
        if passenger.status != PassengerStatus::Scheduled {
            return Err(Error::InvalidPassengerTransition {
                student,
                status: passenger.status,
                action: "pick up",
            });
        }
        passenger.status = PassengerStatus::PickedUp;
        passenger.pickup_time = Some(now);
        Ok(())
    }

    /// A drop can never precede the pickup.
    pub fn record_drop(&mut self, student: Uuid, now: DateTime<Utc>) -> Result<(), Error> {
        let passenger = self.passenger_for_event(student, "drop off")?;
        if passenger.status != PassengerStatus::PickedUp {
            return Err(Error::InvalidPassengerTransition {
                student,
                status: passenger.status,
                action: "drop off",
            });
        }
        passenger.status = PassengerStatus::DroppedOff;
        passenger.drop_time = Some(now);
        Ok(())
    }

    pub fn mark_absent(&mut self, student: Uuid) -> Result<(), Error> {
        let passenger = self.passenger_for_event(student, "mark absent")?;
        if passenger.status != PassengerStatus::Scheduled {
            return Err(Error::InvalidPassengerTransition {
                student,
                status: passenger.status,
                action: "mark absent",
            });
        }
        passenger.status = PassengerStatus::Absent;
        Ok(())
    }

    /// No passenger event is accepted once the trip is terminal.
    fn passenger_for_event(
        &mut self,
        student: Uuid,
        action: &'static str,
    ) -> Result<&mut Passenger, Error> {
        if self.status.is_terminal() {
            return Err(Error::InvalidTransition {
                status: self.status,
                action: "update passengers of",
            });
        }
        let trip = self.id;
        self.passengers
            .iter_mut()
            .find(|passenger| passenger.student_id == student)
            .ok_or(Error::PassengerNotFound { trip, student })
    }
}
