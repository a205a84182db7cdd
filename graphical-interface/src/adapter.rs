use geodesic::{Coordinate, RingError, RingSpec};
use thiserror::Error;

use crate::{
    features::{build_features, FeatureCollection, FeatureError},
    location::LocationProvider,
    surface::{
        GeoJsonSource, MarkerIcon, RenderSurface, SymbolLayer, ICON_ID, LAYER_ID, SOURCE_ID,
    },
};

/// Distance from the user to every marker, in meters.
pub const DEFAULT_RADIUS_M: f64 = 10_000.0;
/// Angle between two consecutive markers, in degrees.
pub const DEFAULT_STEP_DEG: u32 = 10;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Ring(#[from] RingError),
    #[error(transparent)]
    Feature(#[from] FeatureError),
}

/// What a call to [`MapIntegrationAdapter::draw_markers`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOutcome {
    /// The location provider had no fix; nothing was registered.
    NoLocation,
    /// The icon, source and layer were registered.
    Drawn { center: Coordinate, markers: usize },
}

/// Places a ring of markers around the last known location on a map.
///
/// The adapter keeps no reference to the map: the surface is passed to every
/// call, so the same adapter can draw on any number of styles.
#[derive(Debug, Clone)]
pub struct MapIntegrationAdapter {
    radius_m: f64,
    step_deg: u32,
    normalize_longitude: bool,
    icon: MarkerIcon,
}

impl Default for MapIntegrationAdapter {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            step_deg: DEFAULT_STEP_DEG,
            normalize_longitude: true,
            icon: MarkerIcon::default(),
        }
    }
}

impl MapIntegrationAdapter {
    /// Creates an adapter, checking the ring parameters up front.
    pub fn new(
        radius_m: f64,
        step_deg: u32,
        normalize_longitude: bool,
    ) -> Result<Self, AdapterError> {
        RingSpec::new(Coordinate::new(0.0, 0.0), radius_m, step_deg)?;
        Ok(Self {
            radius_m,
            step_deg,
            normalize_longitude,
            icon: MarkerIcon::default(),
        })
    }

    pub fn with_icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn step_deg(&self) -> u32 {
        self.step_deg
    }

    /// Builds the center and ring features for `center`.
    pub fn ring_features(&self, center: Coordinate) -> Result<FeatureCollection, AdapterError> {
        let mut points = RingSpec::new(center, self.radius_m, self.step_deg)?.points();
        if self.normalize_longitude {
            points = points.map(Coordinate::normalized);
        }
        Ok(build_features(&points)?)
    }

    /// Reads the last known location and, if there is one, registers the
    /// marker icon, a source with the ring features and a symbol layer on
    /// `surface`.
    ///
    /// The ids are fixed, so calling this again hands the surface the same
    /// ids; whether that replaces or duplicates entries is up to the surface.
    pub fn draw_markers<S, L>(
        &self,
        surface: &mut S,
        location: &L,
    ) -> Result<DrawOutcome, AdapterError>
    where
        S: RenderSurface + ?Sized,
        L: LocationProvider + ?Sized,
    {
        let Some(center) = location.last_known_location() else {
            log::warn!("No known location yet, the marker ring was not drawn");
            return Ok(DrawOutcome::NoLocation);
        };

        let features = self.ring_features(center)?;
        let markers = features.len();

        surface.add_image(ICON_ID, self.icon.clone());
        surface.add_source(GeoJsonSource::new(SOURCE_ID, features));
        surface.add_layer(
            SymbolLayer::new(LAYER_ID, SOURCE_ID)
                .with_icon_image(ICON_ID)
                .with_icon_allow_overlap(true)
                .with_icon_ignore_placement(true),
        );

        log::info!(
            "Drew {} markers around {} ({} m, every {}°)",
            markers,
            center,
            self.radius_m,
            self.step_deg
        );
        Ok(DrawOutcome::Drawn { center, markers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MapStyle;

    #[test]
    fn test_default_parameters() {
        let adapter = MapIntegrationAdapter::default();
        assert_eq!(adapter.radius_m(), 10_000.0);
        assert_eq!(adapter.step_deg(), 10);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        assert!(matches!(
            MapIntegrationAdapter::new(0.0, 10, true),
            Err(AdapterError::Ring(RingError::InvalidRadius(_)))
        ));
        assert!(matches!(
            MapIntegrationAdapter::new(1_000.0, 11, true),
            Err(AdapterError::Ring(RingError::InvalidStep(11)))
        ));
    }

    #[test]
    fn test_no_location_draws_nothing() {
        let mut style = MapStyle::default();
        let outcome = MapIntegrationAdapter::default()
            .draw_markers(&mut style, &None::<Coordinate>)
            .unwrap();

        assert_eq!(outcome, DrawOutcome::NoLocation);
        assert!(style.layers().is_empty());
        assert!(style.source(SOURCE_ID).is_none());
        assert!(style.image(ICON_ID).is_none());
    }

    #[test]
    fn test_draw_registers_icon_source_and_layer() {
        let mut style = MapStyle::default();
        let center = Coordinate::new(-34.608406, -58.372159);
        let outcome = MapIntegrationAdapter::default()
            .draw_markers(&mut style, &Some(center))
            .unwrap();

        assert_eq!(outcome, DrawOutcome::Drawn { center, markers: 37 });
        assert!(style.image(ICON_ID).is_some());
        assert_eq!(style.source(SOURCE_ID).unwrap().features.len(), 37);

        let layer = style.layer(LAYER_ID).unwrap();
        assert_eq!(layer.source_id, SOURCE_ID);
        assert_eq!(layer.icon_image.as_deref(), Some(ICON_ID));
        assert!(layer.icon_allow_overlap);
        assert!(layer.icon_ignore_placement);
    }

    #[test]
    fn test_ring_features_wrap_longitude_when_asked() {
        let center = Coordinate::new(0.0, 179.99);

        let wrapped = MapIntegrationAdapter::new(10_000.0, 10, true)
            .unwrap()
            .ring_features(center)
            .unwrap();
        assert!(wrapped
            .iter()
            .all(|f| (-180.0..=180.0).contains(&f.geometry.lon())));

        let raw = MapIntegrationAdapter::new(10_000.0, 10, false)
            .unwrap()
            .ring_features(center)
            .unwrap();
        assert!(raw.iter().any(|f| f.geometry.lon() > 180.0));
    }
}
