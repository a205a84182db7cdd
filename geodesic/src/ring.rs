use crate::{destination_point, Coordinate, RingError};

/// Parameters of a ring of points around a center.
///
/// A `RingSpec` can only be built through [`RingSpec::new`], so a value of
/// this type always has a positive radius and a step that divides 360.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    center: Coordinate,
    radius_m: f64,
    step_deg: u32,
}

impl RingSpec {
    /// Validates the ring parameters.
    ///
    /// `radius_m` must be finite and greater than zero. `step_deg` must be in
    /// `1..=360` and divide 360 evenly so the ring closes on itself.
    pub fn new(center: Coordinate, radius_m: f64, step_deg: u32) -> Result<Self, RingError> {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(RingError::InvalidRadius(radius_m));
        }
        if step_deg == 0 || step_deg > 360 || 360 % step_deg != 0 {
            return Err(RingError::InvalidStep(step_deg));
        }

        Ok(Self {
            center,
            radius_m,
            step_deg,
        })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn step_deg(&self) -> u32 {
        self.step_deg
    }

    /// Number of points on the ring, not counting the center.
    pub fn ring_len(&self) -> usize {
        (360 / self.step_deg) as usize
    }

    /// Computes the center followed by one point per bearing
    /// `0, step, 2 * step, .., 360 - step`.
    pub fn points(&self) -> PointSet {
        let mut points = Vec::with_capacity(self.ring_len() + 1);
        points.push(self.center);

        for i in 0..self.ring_len() {
            let bearing = (i as u32 * self.step_deg) as f64;
            points.push(destination_point(self.center, bearing, self.radius_m));
        }

        PointSet { points }
    }
}

/// Shorthand for `RingSpec::new(center, radius_m, step_deg)?.points()`.
pub fn generate_ring(
    center: Coordinate,
    radius_m: f64,
    step_deg: u32,
) -> Result<PointSet, RingError> {
    Ok(RingSpec::new(center, radius_m, step_deg)?.points())
}

/// The center of a ring followed by its points in increasing bearing order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Coordinate>,
}

impl PointSet {
    /// The center the ring was generated around.
    pub fn center(&self) -> Coordinate {
        self.points[0]
    }

    /// The ring points, without the center.
    pub fn ring(&self) -> &[Coordinate] {
        &self.points[1..]
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a set holds at least its center.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }

    /// Applies `f` to every point, center included.
    pub fn map(self, f: impl Fn(Coordinate) -> Coordinate) -> PointSet {
        PointSet {
            points: self.points.into_iter().map(f).collect(),
        }
    }

    pub fn into_vec(self) -> Vec<Coordinate> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{haversine_distance, EARTH_RADIUS_M};

    const DEG_10KM: f64 = 0.089932;

    fn equator_ring() -> PointSet {
        generate_ring(Coordinate::new(0.0, 0.0), 10_000.0, 10).unwrap()
    }

    #[test]
    fn test_point_count_for_every_divisor_of_360() {
        let center = Coordinate::new(-34.608406, -58.372159);
        for step in (1..=360).filter(|step| 360 % step == 0) {
            let points = generate_ring(center, 500.0, step).unwrap();
            assert_eq!(points.len(), 1 + (360 / step) as usize, "step {}", step);
            assert_eq!(points.ring().len(), (360 / step) as usize);
        }
    }

    #[test]
    fn test_first_point_is_the_center() {
        let center = Coordinate::new(48.858093, 2.294694);
        let points = generate_ring(center, 10_000.0, 10).unwrap();
        assert_eq!(points.center(), center);
        assert_eq!(points.as_slice()[0], center);
    }

    #[test]
    fn test_tiny_radius_converges_to_center() {
        let center = Coordinate::new(35.6762, 139.6503);
        let points = generate_ring(center, 1e-6, 30).unwrap();
        for point in points.ring() {
            assert!((point.lat - center.lat).abs() < 1e-9);
            assert!((point.lon - center.lon).abs() < 1e-9);
        }
    }

    #[test]
    fn test_opposite_bearings_are_symmetric_around_center() {
        let center = Coordinate::new(-34.608406, -58.372159);
        let radius = 10_000.0;
        let points = generate_ring(center, radius, 10).unwrap();
        let ring = points.ring();
        let half = ring.len() / 2;

        for i in 0..half {
            let forward = haversine_distance(center, ring[i]);
            let backward = haversine_distance(center, ring[i + half]);
            assert!((forward - backward).abs() < 1e-6);

            let across = haversine_distance(ring[i], ring[i + half]);
            assert!((across - 2.0 * radius).abs() / (2.0 * radius) < 1e-6);
        }
    }

    #[test]
    fn test_every_ring_point_is_at_the_radius() {
        for center in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(60.1699, 24.9384),
            Coordinate::new(-54.8019, -68.3030),
            Coordinate::new(12.0, 179.95),
        ] {
            let points = generate_ring(center, 10_000.0, 10).unwrap();
            for point in points.ring() {
                let distance = haversine_distance(center, *point);
                assert!(
                    (distance - 10_000.0).abs() / 10_000.0 < 1e-6,
                    "{} is {} m from {}",
                    point,
                    distance,
                    center
                );
            }
        }
    }

    #[test]
    fn test_equator_scenario() {
        let points = equator_ring();
        assert_eq!(points.len(), 37);
        assert_eq!(points.center(), Coordinate::new(0.0, 0.0));

        let north = points.ring()[0];
        assert!((north.lat - DEG_10KM).abs() < 1e-5);
        assert!(north.lon.abs() < 1e-12);

        let east = points.ring()[9];
        assert!(east.lat.abs() < 1e-12);
        assert!((east.lon - DEG_10KM).abs() < 1e-5);

        let south = points.ring()[18];
        assert!((south.lat + DEG_10KM).abs() < 1e-5);
    }

    #[test]
    fn test_ring_points_follow_increasing_bearing() {
        let points = equator_ring();
        let ring = points.ring();
        // Clockwise from north: longitudes grow over the first quarter.
        for pair in ring[0..=9].windows(2) {
            assert!(pair[1].lon > pair[0].lon);
        }
    }

    #[test]
    fn test_pole_center_yields_finite_points() {
        for lat in [90.0, -90.0] {
            let points = generate_ring(Coordinate::new(lat, 0.0), 10_000.0, 10).unwrap();
            assert!(points.iter().all(Coordinate::is_finite));
        }
    }

    #[test]
    fn test_ring_reaching_the_pole_is_finite() {
        for i in 0..2000 {
            let lat = i as f64 * 0.045;
            let radius = (90.0 - lat).to_radians() * EARTH_RADIUS_M;
            let points = generate_ring(Coordinate::new(lat, 10.0), radius, 10).unwrap();

            assert!(
                points.iter().all(Coordinate::is_finite),
                "non-finite ring for lat {} radius {}",
                lat,
                radius
            );
            assert!((points.ring()[0].lat - 90.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_longitude_is_not_wrapped() {
        let points = generate_ring(Coordinate::new(0.0, 179.95), 10_000.0, 10).unwrap();
        let east = points.ring()[9];
        assert!(east.lon > 180.0);
        assert!(east.normalized().lon < -179.9);
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        let center = Coordinate::new(0.0, 0.0);
        assert_eq!(
            generate_ring(center, 0.0, 10),
            Err(RingError::InvalidRadius(0.0))
        );
        assert_eq!(
            generate_ring(center, -5.0, 10),
            Err(RingError::InvalidRadius(-5.0))
        );
        assert!(matches!(
            generate_ring(center, f64::NAN, 10),
            Err(RingError::InvalidRadius(_))
        ));
        assert!(RingSpec::new(center, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        let center = Coordinate::new(0.0, 0.0);
        for step in [0, 7, 361, 720] {
            assert_eq!(
                RingSpec::new(center, 1_000.0, step),
                Err(RingError::InvalidStep(step))
            );
        }
    }

    #[test]
    fn test_full_turn_step_gives_single_point() {
        let points = generate_ring(Coordinate::new(10.0, 10.0), 1_000.0, 360).unwrap();
        assert_eq!(points.len(), 2);
        assert!(points.ring()[0].lat > 10.0);
    }
}
