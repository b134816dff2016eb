use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use uuid::Uuid;

use crate::{error::Error, repository::TripStore, trip::Trip};

/// In-memory trip store.
///
/// The outer `RwLock` only guards the map structure; each trip sits behind its
/// own `Mutex`, so pings for different trips never contend with each other.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trips: RwLock<HashMap<Uuid, Arc<Mutex<Trip>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }

    fn entry(&self, id: Uuid) -> Result<Arc<Mutex<Trip>>, Error> {
        let trips = self
            .trips
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        trips.get(&id).cloned().ok_or(Error::NotFound(id))
    }
}

impl TripStore for MemoryStore {
    fn insert(&self, trip: Trip) -> Result<(), Error> {
        let mut trips = self
            .trips
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if trips.contains_key(&trip.id) {
            return Err(Error::Validation(format!(
                "trip {} already exists",
                trip.id
            )));
        }
        trips.insert(trip.id, Arc::new(Mutex::new(trip)));
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<Trip, Error> {
        let entry = self.entry(id)?;
        let trip = entry.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(trip.clone())
    }

    fn list(&self) -> Vec<Trip> {
        let trips = self
            .trips
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        trips
            .values()
            .map(|entry| {
                entry
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone()
            })
            .collect()
    }

    fn update(
        &self,
        id: Uuid,
        apply: &mut dyn FnMut(&mut Trip) -> Result<(), Error>,
    ) -> Result<Trip, Error> {
        let entry = self.entry(id)?;
        let mut trip = entry.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut trip)?;
        Ok(trip.clone())
    }
}
