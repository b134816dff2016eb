use uuid::Uuid;

mod memory;
pub use memory::*;

use crate::{error::Error, trip::Trip};

/// Durable access to the trip aggregate.
///
/// `update` is the atomic read-modify-write primitive: the store runs the
/// closure with exclusive access to the persisted record, so a check-and-set
/// evaluated inside it is linearizable across all concurrent callers for the
/// same trip id. All mutation of a stored trip goes through it; `get` and
/// `list` hand out detached clones.
pub trait TripStore: Send + Sync {
    fn insert(&self, trip: Trip) -> Result<(), Error>;
    fn get(&self, id: Uuid) -> Result<Trip, Error>;
    fn list(&self) -> Vec<Trip>;
    fn update(
        &self,
        id: Uuid,
        apply: &mut dyn FnMut(&mut Trip) -> Result<(), Error>,
    ) -> Result<Trip, Error>;
}
