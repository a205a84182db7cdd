//! Spherical geometry used to place markers around a position: destination
//! points, haversine distances and evenly spaced rings.

mod coordinate;
mod errors;
mod ring;

pub use coordinate::Coordinate;
pub use errors::RingError;
pub use ring::{generate_ring, PointSet, RingSpec};

use std::f64::consts::PI;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Computes the point reached by travelling `distance_m` meters from `origin`
/// along the great circle starting at `bearing_deg` (degrees clockwise from north).
///
/// The longitude of the result is not wrapped, see [`Coordinate::normalized`].
pub fn destination_point(origin: Coordinate, bearing_deg: f64, distance_m: f64) -> Coordinate {
    let dist_radians = distance_m / EARTH_RADIUS_M;
    let lat_radians = origin.lat * PI / 180.0;
    let lon_radians = origin.lon * PI / 180.0;
    let bearing_radians = bearing_deg * PI / 180.0;

    // Rounding can push the sine just past ±1 when the point lands on a pole.
    let point_lat_radians = (lat_radians.sin() * dist_radians.cos()
        + lat_radians.cos() * dist_radians.sin() * bearing_radians.cos())
    .clamp(-1.0, 1.0)
    .asin();
    let point_lon_radians = lon_radians
        + (bearing_radians.sin() * dist_radians.sin() * lat_radians.cos())
            .atan2(dist_radians.cos() - lat_radians.sin() * point_lat_radians.sin());

    Coordinate::new(
        point_lat_radians * 180.0 / PI,
        point_lon_radians * 180.0 / PI,
    )
}

/// Great-circle distance in meters between two coordinates.
pub fn haversine_distance(origin: Coordinate, dest: Coordinate) -> f64 {
    let origin_lat_rad = origin.lat * PI / 180.0;
    let origin_lon_rad = origin.lon * PI / 180.0;
    let dest_lat_rad = dest.lat * PI / 180.0;
    let dest_lon_rad = dest.lon * PI / 180.0;

    let delta_lat = dest_lat_rad - origin_lat_rad;
    let delta_lon = dest_lon_rad - origin_lon_rad;

    let a = ((delta_lat / 2.0).sin().powi(2)
        + origin_lat_rad.cos() * dest_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_due_north_on_equator() {
        let point = destination_point(Coordinate::new(0.0, 0.0), 0.0, 10_000.0);
        assert!((point.lat - 0.089932).abs() < 1e-5);
        assert!(point.lon.abs() < 1e-12);
    }

    #[test]
    fn test_destination_matches_haversine() {
        let origin = Coordinate::new(-34.608406, -58.372159);
        for bearing in [0.0, 45.0, 135.0, 200.0, 315.0] {
            let point = destination_point(origin, bearing, 25_000.0);
            let distance = haversine_distance(origin, point);
            assert!((distance - 25_000.0).abs() / 25_000.0 < 1e-6);
        }
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let point = Coordinate::new(51.5, -0.12);
        assert_eq!(haversine_distance(point, point), 0.0);
    }

    #[test]
    fn test_haversine_antipodes_are_half_circumference() {
        let expected = EARTH_RADIUS_M * PI;
        for i in 0..2000 {
            let lat = -90.0 + i as f64 * 0.09;
            let lon = -180.0 + i as f64 * 0.179;
            let distance =
                haversine_distance(Coordinate::new(lat, lon), Coordinate::new(-lat, lon + 180.0));
            assert!(
                (distance - expected).abs() / expected < 1e-6,
                "{} from ({}, {}) to its antipode",
                distance,
                lat,
                lon
            );
        }
    }

    #[test]
    fn test_haversine_quarter_meridian() {
        let distance = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(90.0, 0.0));
        let expected = EARTH_RADIUS_M * PI / 2.0;
        assert!((distance - expected).abs() < 1e-6);
    }
}
