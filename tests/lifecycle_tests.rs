use chrono::{NaiveDate, NaiveTime, Utc};
use fleetline::prelude::*;
use uuid::Uuid;

fn trip_with_status(status: TripStatus) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        route_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        driver_id: Uuid::new_v4(),
        direction: Direction::ToSchool,
        scheduled_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        scheduled_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
        status,
        current_location: None,
        stops: Vec::new(),
        passengers: Vec::new(),
        actual_start_time: None,
        actual_end_time: None,
    }
}

#[test]
fn start_from_scheduled_test() {
    let mut trip = trip_with_status(TripStatus::Scheduled);
    let now = Utc::now();
    trip.start(now).unwrap();
    assert_eq!(trip.status, TripStatus::InProgress);
    assert_eq!(trip.actual_start_time, Some(now));
}

#[test]
fn start_rejected_from_other_states_test() {
    for status in [
        TripStatus::InProgress,
        TripStatus::Delayed,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ] {
        let mut trip = trip_with_status(status);
        assert!(matches!(
            trip.start(Utc::now()),
            Err(Error::InvalidTransition { .. })
        ));
        assert_eq!(trip.status, status);
        assert_eq!(trip.actual_start_time, None);
    }
}

#[test]
fn end_from_in_progress_test() {
    let mut trip = trip_with_status(TripStatus::InProgress);
    let now = Utc::now();
    trip.end(now).unwrap();
    assert_eq!(trip.status, TripStatus::Completed);
    assert_eq!(trip.actual_end_time, Some(now));
}

#[test]
fn end_from_delayed_test() {
    let mut trip = trip_with_status(TripStatus::Delayed);
    trip.end(Utc::now()).unwrap();
    assert_eq!(trip.status, TripStatus::Completed);
}

#[test]
fn end_rejected_from_other_states_test() {
    for status in [
        TripStatus::Scheduled,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ] {
        let mut trip = trip_with_status(status);
        assert!(matches!(
            trip.end(Utc::now()),
            Err(Error::InvalidTransition { .. })
        ));
        assert_eq!(trip.status, status);
        assert_eq!(trip.actual_end_time, None);
    }
}

#[test]
fn cancel_from_non_terminal_test() {
    for status in [
        TripStatus::Scheduled,
        TripStatus::InProgress,
        TripStatus::Delayed,
    ] {
        let mut trip = trip_with_status(status);
        trip.cancel().unwrap();
        assert_eq!(trip.status, TripStatus::Cancelled);
    }
}

#[test]
fn cancel_rejected_when_terminal_test() {
    for status in [TripStatus::Completed, TripStatus::Cancelled] {
        let mut trip = trip_with_status(status);
        assert!(matches!(
            trip.cancel(),
            Err(Error::InvalidTransition { .. })
        ));
        assert_eq!(trip.status, status);
    }
}

#[test]
fn delay_only_from_in_progress_test() {
    let mut trip = trip_with_status(TripStatus::InProgress);
    trip.mark_delayed().unwrap();
    assert_eq!(trip.status, TripStatus::Delayed);

    for status in [
        TripStatus::Scheduled,
        TripStatus::Delayed,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ] {
        let mut trip = trip_with_status(status);
        assert!(matches!(
            trip.mark_delayed(),
            Err(Error::InvalidTransition { .. })
        ));
        assert_eq!(trip.status, status);
    }
}

#[test]
fn no_jump_from_scheduled_to_completed_test() {
    let mut trip = trip_with_status(TripStatus::Scheduled);
    assert!(trip.end(Utc::now()).is_err());
    assert_eq!(trip.status, TripStatus::Scheduled);
}
