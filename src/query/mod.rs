use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::Error,
    repository::TripStore,
    trip::{Trip, TripStatus},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TripFilter {
    pub driver: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub status: Option<TripStatus>,
}

impl TripFilter {
    fn matches(&self, trip: &Trip) -> bool {
        if let Some(driver) = self.driver
            && trip.driver_id != driver
        {
            return false;
        }
        if let Some(date) = self.date
            && trip.scheduled_date != date
        {
            return false;
        }
        if let Some(status) = self.status
            && trip.status != status
        {
            return false;
        }
        true
    }
}

/// Resolves the external references carried by a trip to display records.
/// Backed by whatever directory the deployment has; ids with no entry stay
/// unresolved.
pub trait RefDirectory: Send + Sync {
    fn route_name(&self, id: Uuid) -> Option<Arc<str>>;
    fn vehicle_number(&self, id: Uuid) -> Option<Arc<str>>;
    fn driver_name(&self, id: Uuid) -> Option<Arc<str>>;
}

/// A trip with its route/vehicle/driver references resolved for display.
#[derive(Debug, Clone)]
pub struct TripDetails {
    pub trip: Trip,
    pub route_name: Option<Arc<str>>,
    pub vehicle_number: Option<Arc<str>>,
    pub driver_name: Option<Arc<str>>,
}

/// Read-only projections over the trip store for driver and dispatcher views.
pub struct TripQuery {
    store: Arc<dyn TripStore>,
}

impl TripQuery {
    pub fn new(store: Arc<dyn TripStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, id: Uuid) -> Result<Trip, Error> {
        self.store.get(id)
    }

    pub fn get_detailed(
        &self,
        id: Uuid,
        directory: &dyn RefDirectory,
    ) -> Result<TripDetails, Error> {
        let trip = self.store.get(id)?;
        let route_name = directory.route_name(trip.route_id);
        let vehicle_number = directory.vehicle_number(trip.vehicle_id);
        let driver_name = directory.driver_name(trip.driver_id);
        Ok(TripDetails {
            trip,
            route_name,
            vehicle_number,
            driver_name,
        })
    }

    /// Matching trips, newest scheduled first.
    pub fn list(&self, filter: TripFilter) -> Vec<Trip> {
        let mut trips: Vec<Trip> = self
            .store
            .list()
            .into_iter()
            .filter(|trip| filter.matches(trip))
            .collect();
        trips.sort_by(|a, b| {
            (b.scheduled_date, b.scheduled_time).cmp(&(a.scheduled_date, a.scheduled_time))
        });
        trips
    }

    pub fn list_for_driver(&self, driver: Uuid) -> Vec<Trip> {
        self.list(TripFilter {
            driver: Some(driver),
            ..Default::default()
        })
    }
}
