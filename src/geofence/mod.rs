use crate::{
    shared::geo::{Coordinate, Distance},
    trip::Stop,
};

pub const DEFAULT_PROXIMITY_THRESHOLD: Distance = Distance::from_kilometers(1.0);

/// Indices of the stops the vehicle has newly come within `threshold` of.
///
/// Stops that were already reached are skipped, as are stops without a known
/// coordinate. Pure and stateless; the caller owns the flip of `is_reached`.
pub fn find_newly_reached(current: &Coordinate, stops: &[Stop], threshold: Distance) -> Vec<usize> {
    stops
        .iter()
        .enumerate()
        .filter_map(|(index, stop)| {
            if stop.is_reached {
                return None;
            }
            let coordinate = stop.coordinate.as_ref()?;
            (current.distance(coordinate) <= threshold).then_some(index)
        })
        .collect()
}
