use fleetline::{
    geofence::{self, DEFAULT_PROXIMITY_THRESHOLD},
    shared::geo::{Coordinate, Distance},
    trip::Stop,
};

fn stop(name: &str, coordinate: Option<Coordinate>, order: u32, is_reached: bool) -> Stop {
    Stop {
        name: name.into(),
        coordinate,
        order,
        is_reached,
    }
}

#[test]
fn finds_stop_within_threshold_test() {
    let current = Coordinate {
        latitude: 12.975,
        longitude: 77.5981,
    };
    let stops = vec![stop(
        "School Gate",
        Some(Coordinate {
            latitude: 12.975,
            longitude: 77.598,
        }),
        0,
        false,
    )];
    let found = geofence::find_newly_reached(&current, &stops, DEFAULT_PROXIMITY_THRESHOLD);
    assert_eq!(found, vec![0]);
}

#[test]
fn skips_reached_stops_test() {
    let current = Coordinate {
        latitude: 12.975,
        longitude: 77.598,
    };
    let stops = vec![
        stop(
            "Market",
            Some(Coordinate {
                latitude: 12.975,
                longitude: 77.598,
            }),
            0,
            true,
        ),
        stop(
            "Library",
            Some(Coordinate {
                latitude: 12.9751,
                longitude: 77.598,
            }),
            1,
            false,
        ),
    ];
    let found = geofence::find_newly_reached(&current, &stops, DEFAULT_PROXIMITY_THRESHOLD);
    assert_eq!(found, vec![1]);
}

#[test]
fn skips_stops_without_coordinates_test() {
    let current = Coordinate {
        latitude: 12.975,
        longitude: 77.598,
    };
    let stops = vec![stop("Unknown", None, 0, false)];
    let found = geofence::find_newly_reached(&current, &stops, DEFAULT_PROXIMITY_THRESHOLD);
    assert!(found.is_empty());
}

#[test]
fn ignores_stops_outside_threshold_test() {
    let current = Coordinate {
        latitude: 12.975,
        longitude: 77.598,
    };
    // Roughly 11 km east.
    let stops = vec![stop(
        "Far Away",
        Some(Coordinate {
            latitude: 12.975,
            longitude: 77.699,
        }),
        0,
        false,
    )];
    let found = geofence::find_newly_reached(&current, &stops, DEFAULT_PROXIMITY_THRESHOLD);
    assert!(found.is_empty());
}

#[test]
fn custom_threshold_test() {
    let current = Coordinate {
        latitude: 12.975,
        longitude: 77.598,
    };
    // Roughly 1.1 km east: outside the default 1 km, inside 2 km.
    let stops = vec![stop(
        "Edge Case",
        Some(Coordinate {
            latitude: 12.975,
            longitude: 77.6081,
        }),
        0,
        false,
    )];
    assert!(geofence::find_newly_reached(&current, &stops, DEFAULT_PROXIMITY_THRESHOLD).is_empty());
    let found = geofence::find_newly_reached(&current, &stops, Distance::from_kilometers(2.0));
    assert_eq!(found, vec![0]);
}
