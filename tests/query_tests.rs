use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use fleetline::prelude::*;
use uuid::Uuid;

fn trip(driver: Uuid, date: NaiveDate, time: NaiveTime, status: TripStatus) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        route_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        driver_id: driver,
        direction: Direction::ToSchool,
        scheduled_date: date,
        scheduled_time: time,
        status,
        current_location: None,
        stops: Vec::new(),
        passengers: Vec::new(),
        actual_start_time: None,
        actual_end_time: None,
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
}

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

#[test]
fn filter_by_driver_test() {
    let store = Arc::new(MemoryStore::new());
    let driver_a = Uuid::new_v4();
    let driver_b = Uuid::new_v4();
    store
        .insert(trip(driver_a, date(1), time(7), TripStatus::Scheduled))
        .unwrap();
    store
        .insert(trip(driver_b, date(1), time(7), TripStatus::Scheduled))
        .unwrap();

    let query = TripQuery::new(store);
    let trips = query.list_for_driver(driver_a);
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].driver_id, driver_a);
}

#[test]
fn filter_by_date_and_status_test() {
    let store = Arc::new(MemoryStore::new());
    let driver = Uuid::new_v4();
    store
        .insert(trip(driver, date(1), time(7), TripStatus::Completed))
        .unwrap();
    store
        .insert(trip(driver, date(2), time(7), TripStatus::Scheduled))
        .unwrap();
    store
        .insert(trip(driver, date(2), time(15), TripStatus::Completed))
        .unwrap();

    let query = TripQuery::new(store);
    let trips = query.list(TripFilter {
        date: Some(date(2)),
        status: Some(TripStatus::Completed),
        ..Default::default()
    });
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].scheduled_date, date(2));
    assert_eq!(trips[0].status, TripStatus::Completed);
}

#[test]
fn list_orders_newest_first_test() {
    let store = Arc::new(MemoryStore::new());
    let driver = Uuid::new_v4();
    store
        .insert(trip(driver, date(1), time(7), TripStatus::Completed))
        .unwrap();
    store
        .insert(trip(driver, date(3), time(7), TripStatus::Scheduled))
        .unwrap();
    store
        .insert(trip(driver, date(3), time(15), TripStatus::Scheduled))
        .unwrap();
    store
        .insert(trip(driver, date(2), time(7), TripStatus::Completed))
        .unwrap();

    let query = TripQuery::new(store);
    let trips = query.list(TripFilter::default());
    assert_eq!(trips.len(), 4);
    assert_eq!(
        (trips[0].scheduled_date, trips[0].scheduled_time),
        (date(3), time(15))
    );
    assert_eq!(trips[3].scheduled_date, date(1));
}

struct FixedDirectory;

impl RefDirectory for FixedDirectory {
    fn route_name(&self, _id: Uuid) -> Option<std::sync::Arc<str>> {
        Some("Route 7 North".into())
    }

    fn vehicle_number(&self, _id: Uuid) -> Option<std::sync::Arc<str>> {
        Some("KA-01-F-2319".into())
    }

    fn driver_name(&self, _id: Uuid) -> Option<std::sync::Arc<str>> {
        None
    }
}

#[test]
fn get_detailed_resolves_references_test() {
    let store = Arc::new(MemoryStore::new());
    let driver = Uuid::new_v4();
    let stored = trip(driver, date(1), time(7), TripStatus::Scheduled);
    let id = stored.id;
    store.insert(stored).unwrap();

    let query = TripQuery::new(store);
    let details = query.get_detailed(id, &FixedDirectory).unwrap();
    assert_eq!(details.trip.id, id);
    assert_eq!(details.route_name.as_deref(), Some("Route 7 North"));
    assert_eq!(details.vehicle_number.as_deref(), Some("KA-01-F-2319"));
    assert!(details.driver_name.is_none());
}

#[test]
fn get_missing_trip_test() {
    let store = Arc::new(MemoryStore::new());
    let query = TripQuery::new(store);
    assert!(matches!(
        query.get(Uuid::new_v4()),
        Err(Error::NotFound(_))
    ));
}
