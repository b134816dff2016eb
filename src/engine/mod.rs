use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    bus::{Event, NotificationBus},
    error::Error,
    geofence,
    repository::TripStore,
    shared::geo::{Coordinate, Distance},
    trip::{Direction, Passenger, PassengerStatus, Stop, TrackedLocation, Trip, TripStatus},
};

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub proximity_threshold: Distance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proximity_threshold: geofence::DEFAULT_PROXIMITY_THRESHOLD,
        }
    }
}

impl Config {
    pub fn with_threshold(threshold: Distance) -> Result<Self, Error> {
        if threshold.as_meters() <= 0.0 {
            return Err(Error::Validation(
                "proximity threshold must be positive".into(),
            ));
        }
        Ok(Self {
            proximity_threshold: threshold,
        })
    }
}

/// Inputs for creating a trip. The stop list comes from the route management
/// collaborator and is copied into the trip, not referenced live.
#[derive(Debug, Clone)]
pub struct TripSpec {
    pub route_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub direction: Direction,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub stops: Vec<StopSpec>,
    pub passengers: Vec<PassengerSpec>,
}

#[derive(Debug, Clone)]
pub struct StopSpec {
    pub name: Arc<str>,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Clone)]
pub struct PassengerSpec {
    pub student_id: Uuid,
    pub pickup_point: Option<Arc<str>>,
    pub drop_point: Option<Arc<str>>,
}

/// What happened to a position report.
///
/// The rejections are expected no-ops rather than errors: late pings from an
/// ended trip and out-of-order network delivery both occur in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Accepted { reached_stops: Vec<Arc<str>> },
    NotInProgress,
    Stale,
}

/// The live tracking engine: lifecycle transitions, location ingestion and
/// event fan-out. Stateless apart from the injected store and bus, so one
/// instance serves any number of concurrent callers.
pub struct Tracker {
    store: Arc<dyn TripStore>,
    bus: Arc<dyn NotificationBus>,
    config: Config,
}

impl Tracker {
    pub fn new(store: Arc<dyn TripStore>, bus: Arc<dyn NotificationBus>) -> Self {
        Self {
            store,
            bus,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn create_trip(&self, spec: TripSpec) -> Result<Trip, Error> {
        for stop in &spec.stops {
            if let Some(coordinate) = &stop.coordinate {
                coordinate.validate()?;
            }
        }

        let stops = spec
            .stops
            .into_iter()
            .enumerate()
            .map(|(index, stop)| Stop {
                name: stop.name,
                coordinate: stop.coordinate,
                order: index as u32,
                is_reached: false,
            })
            .collect();
        let passengers = spec
            .passengers
            .into_iter()
            .map(|passenger| Passenger {
                student_id: passenger.student_id,
                pickup_point: passenger.pickup_point,
                drop_point: passenger.drop_point,
                status: PassengerStatus::Scheduled,
                pickup_time: None,
                drop_time: None,
            })
            .collect();

        let trip = Trip {
            id: Uuid::new_v4(),
            route_id: spec.route_id,
            vehicle_id: spec.vehicle_id,
            driver_id: spec.driver_id,
            direction: spec.direction,
            scheduled_date: spec.scheduled_date,
            scheduled_time: spec.scheduled_time,
            status: TripStatus::Scheduled,
            current_location: None,
            stops,
            passengers,
            actual_start_time: None,
            actual_end_time: None,
        };
        self.store.insert(trip.clone())?;
        info!(trip = %trip.id, driver = %trip.driver_id, "trip created");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    /// Only the assigned driver may start a trip.
    pub fn start(&self, id: Uuid, driver: Uuid) -> Result<Trip, Error> {
        let now = Utc::now();
        let trip = self.store.update(id, &mut |trip| {
            authorize_driver(trip, driver)?;
            trip.start(now)
        })?;
        info!(trip = %id, "trip started");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    /// Only the assigned driver may end a trip.
    pub fn end(&self, id: Uuid, driver: Uuid) -> Result<Trip, Error> {
        let now = Utc::now();
        let trip = self.store.update(id, &mut |trip| {
            authorize_driver(trip, driver)?;
            trip.end(now)
        })?;
        info!(trip = %id, "trip ended");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    /// Dispatcher-side transition; role enforcement sits with the caller.
    pub fn cancel(&self, id: Uuid) -> Result<Trip, Error> {
        let trip = self.store.update(id, &mut |trip| trip.cancel())?;
        info!(trip = %id, "trip cancelled");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    /// Dispatcher-side transition driven by external schedule deviation
    /// detection.
    pub fn mark_delayed(&self, id: Uuid) -> Result<Trip, Error> {
        let trip = self.store.update(id, &mut |trip| trip.mark_delayed())?;
        info!(trip = %id, "trip marked delayed");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    /// Process one position report.
    ///
    /// The location write and every reached-flag flip happen inside one
    /// atomic store update, so two pings processed concurrently for the same
    /// trip can each win the flip at most once per stop. Events are published
    /// only after the update has committed, and never while the record is
    /// locked; a crash between commit and publish can drop a notification but
    /// can never duplicate a flip.
    pub fn ingest(
        &self,
        id: Uuid,
        location: Coordinate,
        timestamp: Option<DateTime<Utc>>,
        driver: Uuid,
    ) -> Result<IngestOutcome, Error> {
        location.validate()?;
        let received = timestamp.unwrap_or_else(Utc::now);
        let threshold = self.config.proximity_threshold;

        let mut reached: Vec<Arc<str>> = Vec::new();
        let mut rejection: Option<IngestOutcome> = None;
        self.store.update(id, &mut |trip| {
            reached.clear();
            rejection = None;
            authorize_driver(trip, driver)?;

            if trip.status != TripStatus::InProgress {
                debug!(trip = %id, status = %trip.status, "ping ignored: trip is not in progress");
                rejection = Some(IngestOutcome::NotInProgress);
                return Ok(());
            }
            if let Some(current) = &trip.current_location
                && received < current.timestamp
            {
                debug!(trip = %id, "ping ignored: older than the stored position");
                rejection = Some(IngestOutcome::Stale);
                return Ok(());
            }

            trip.current_location = Some(TrackedLocation {
                coordinate: location,
                timestamp: received,
            });
            for index in geofence::find_newly_reached(&location, &trip.stops, threshold) {
                let stop = &mut trip.stops[index];
                stop.is_reached = true;
                reached.push(stop.name.clone());
            }
            Ok(())
        })?;

        if let Some(outcome) = rejection {
            return Ok(outcome);
        }

        for stop_name in &reached {
            info!(trip = %id, stop = %stop_name, "vehicle reached stop");
            self.bus
                .publish(Event::proximity(id, stop_name.clone(), received));
        }
        self.bus.publish(Event::TripLocation {
            trip_id: id,
            location,
        });
        Ok(IngestOutcome::Accepted {
            reached_stops: reached,
        })
    }

    pub fn record_pickup(&self, id: Uuid, student: Uuid, driver: Uuid) -> Result<Trip, Error> {
        let now = Utc::now();
        let trip = self.store.update(id, &mut |trip| {
            authorize_driver(trip, driver)?;
            trip.record_pickup(student, now)
        })?;
        info!(trip = %id, %student, "passenger picked up");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    pub fn record_drop(&self, id: Uuid, student: Uuid, driver: Uuid) -> Result<Trip, Error> {
        let now = Utc::now();
        let trip = self.store.update(id, &mut |trip| {
            authorize_driver(trip, driver)?;
            trip.record_drop(student, now)
        })?;
        info!(trip = %id, %student, "passenger dropped off");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }

    pub fn mark_absent(&self, id: Uuid, student: Uuid, driver: Uuid) -> Result<Trip, Error> {
        let trip = self.store.update(id, &mut |trip| {
            authorize_driver(trip, driver)?;
            trip.mark_absent(student)
        })?;
        info!(trip = %id, %student, "passenger marked absent");
        self.bus.publish(Event::TripUpdate { trip: trip.clone() });
        Ok(trip)
    }
}

fn authorize_driver(trip: &Trip, driver: Uuid) -> Result<(), Error> {
    if trip.driver_id != driver {
        return Err(Error::Unauthorized {
            actor: driver,
            trip: trip.id,
        });
    }
    Ok(())
}
