use fleetline::shared::geo::{Coordinate, Distance};

#[test]
fn distance_symmetry_test() {
    let coord_a = Coordinate {
        latitude: 48.85800943005911,
        longitude: 2.3514350059357927,
    };

    let coord_b = Coordinate {
        latitude: 51.5052389927712,
        longitude: -0.12495407345099824,
    };
    assert_eq!(coord_a.distance(&coord_b), coord_b.distance(&coord_a));
}

#[test]
fn distance_identical_points_test() {
    let coord = Coordinate {
        latitude: 12.975,
        longitude: 77.598,
    };
    assert_eq!(coord.distance(&coord).as_meters(), 0.0);
}

#[test]
fn distance_reference_test() {
    // Paris to London is roughly 343.5 km along the great circle.
    let paris = Coordinate {
        latitude: 48.8566,
        longitude: 2.3522,
    };
    let london = Coordinate {
        latitude: 51.5074,
        longitude: -0.1278,
    };
    let d = paris.distance(&london);
    assert!((d.as_kilometers() - 343.5).abs() < 1.0);
}

#[test]
fn distance_short_range_test() {
    // One ten-thousandth of a degree of longitude near Bengaluru,
    // about 10.9 meters.
    let stop = Coordinate {
        latitude: 12.975,
        longitude: 77.598,
    };
    let ping = Coordinate {
        latitude: 12.975,
        longitude: 77.5981,
    };
    let d = stop.distance(&ping);
    assert!(d < Distance::from_meters(15.0));
    assert!(d > Distance::from_meters(5.0));
}

#[test]
fn coordinate_validate_test() {
    let valid = Coordinate {
        latitude: -33.8688,
        longitude: 151.2093,
    };
    assert!(valid.validate().is_ok());

    let bad_latitude = Coordinate {
        latitude: 91.0,
        longitude: 0.0,
    };
    assert!(bad_latitude.validate().is_err());

    let bad_longitude = Coordinate {
        latitude: 0.0,
        longitude: -181.0,
    };
    assert!(bad_longitude.validate().is_err());

    let not_finite = Coordinate {
        latitude: f64::NAN,
        longitude: 0.0,
    };
    assert!(not_finite.validate().is_err());
}
