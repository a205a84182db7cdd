use geodesic::{Coordinate, PointSet};
use serde::Serialize;
use thiserror::Error;
use walkers::Position;

/// A single point feature ready to be handed to the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Position,
}

impl Feature {
    pub fn from_geometry(geometry: Position) -> Self {
        Self { geometry }
    }
}

/// An ordered group of point features published as one map source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Serializes the collection as a GeoJSON `FeatureCollection`.
    ///
    /// Positions are written in GeoJSON order, `[longitude, latitude]`.
    pub fn to_geojson(&self) -> Result<String, serde_json::Error> {
        let collection = GeoJsonCollection {
            kind: "FeatureCollection",
            features: self
                .features
                .iter()
                .map(|feature| GeoJsonFeature {
                    kind: "Feature",
                    geometry: GeoJsonPoint {
                        kind: "Point",
                        coordinates: [feature.geometry.lon(), feature.geometry.lat()],
                    },
                    properties: serde_json::Map::new(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&collection)
    }
}

#[derive(Serialize)]
struct GeoJsonCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<GeoJsonFeature>,
}

#[derive(Serialize)]
struct GeoJsonFeature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: GeoJsonPoint,
    properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("point {index} has a non-finite coordinate {coordinate}")]
    MalformedCoordinate { index: usize, coordinate: Coordinate },
}

/// Turns every point of the set into a point feature, keeping the order.
///
/// The whole batch is rejected if any point is NaN or infinite.
pub fn build_features(points: &PointSet) -> Result<FeatureCollection, FeatureError> {
    let mut features = Vec::with_capacity(points.len());

    for (index, coordinate) in points.iter().enumerate() {
        if !coordinate.is_finite() {
            return Err(FeatureError::MalformedCoordinate {
                index,
                coordinate: *coordinate,
            });
        }
        features.push(Feature::from_geometry(Position::from_lat_lon(
            coordinate.lat,
            coordinate.lon,
        )));
    }

    Ok(FeatureCollection::from_features(features))
}
