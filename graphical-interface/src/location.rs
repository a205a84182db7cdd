use geodesic::Coordinate;

/// Source of the device position.
pub trait LocationProvider {
    /// The most recent fix, if any was ever obtained.
    fn last_known_location(&self) -> Option<Coordinate>;
}

/// A cache of the last position reported to the application.
#[derive(Debug, Clone, Default)]
pub struct LastKnownLocation {
    cached: Option<Coordinate>,
}

impl LastKnownLocation {
    pub fn new(initial: Option<Coordinate>) -> Self {
        Self { cached: initial }
    }

    /// Stores a new fix. Non-finite fixes are ignored and the previous one is kept.
    pub fn update(&mut self, fix: Coordinate) -> bool {
        if !fix.is_finite() {
            log::warn!("Ignoring non-finite location fix {}", fix);
            return false;
        }
        self.cached = Some(fix);
        true
    }

    pub fn clear(&mut self) {
        self.cached = None;
    }
}

impl LocationProvider for LastKnownLocation {
    fn last_known_location(&self) -> Option<Coordinate> {
        self.cached
    }
}

impl LocationProvider for Option<Coordinate> {
    fn last_known_location(&self) -> Option<Coordinate> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_has_no_location() {
        assert_eq!(LastKnownLocation::default().last_known_location(), None);
    }

    #[test]
    fn test_update_replaces_fix() {
        let mut location = LastKnownLocation::new(Some(Coordinate::new(1.0, 2.0)));
        assert!(location.update(Coordinate::new(3.0, 4.0)));
        assert_eq!(
            location.last_known_location(),
            Some(Coordinate::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_non_finite_fix_is_ignored() {
        let mut location = LastKnownLocation::new(Some(Coordinate::new(1.0, 2.0)));
        assert!(!location.update(Coordinate::new(f64::NAN, 4.0)));
        assert_eq!(
            location.last_known_location(),
            Some(Coordinate::new(1.0, 2.0))
        );
        location.clear();
        assert_eq!(location.last_known_location(), None);
    }
}
