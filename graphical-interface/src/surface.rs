use std::collections::HashMap;

use egui::{include_image, ImageSource, Vec2};

use crate::features::FeatureCollection;

/// Identifier of the source holding the ring features.
pub const SOURCE_ID: &str = "SOURCE_ID";
/// Identifier of the marker icon.
pub const ICON_ID: &str = "ICON_ID";
/// Identifier of the symbol layer drawing the markers.
pub const LAYER_ID: &str = "LAYER_ID";

/// An image that symbol layers can reference by id.
#[derive(Debug, Clone)]
pub struct MarkerIcon {
    pub image: ImageSource<'static>,
    pub size: Vec2,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            image: include_image!("../assets/marker-icon.svg"),
            size: Vec2::new(24.0, 32.0),
        }
    }
}

/// A named source of point features.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonSource {
    pub id: String,
    pub features: FeatureCollection,
}

impl GeoJsonSource {
    pub fn new(id: &str, features: FeatureCollection) -> Self {
        Self {
            id: id.to_string(),
            features,
        }
    }
}

/// A layer drawing one icon at each feature of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLayer {
    pub id: String,
    pub source_id: String,
    pub icon_image: Option<String>,
    /// The icon is drawn even if it collides with previously drawn icons.
    pub icon_allow_overlap: bool,
    /// Later icons may be drawn over this one.
    pub icon_ignore_placement: bool,
}

impl SymbolLayer {
    pub fn new(id: &str, source_id: &str) -> Self {
        Self {
            id: id.to_string(),
            source_id: source_id.to_string(),
            icon_image: None,
            icon_allow_overlap: false,
            icon_ignore_placement: false,
        }
    }

    pub fn with_icon_image(mut self, icon_id: &str) -> Self {
        self.icon_image = Some(icon_id.to_string());
        self
    }

    pub fn with_icon_allow_overlap(mut self, allow: bool) -> Self {
        self.icon_allow_overlap = allow;
        self
    }

    pub fn with_icon_ignore_placement(mut self, ignore: bool) -> Self {
        self.icon_ignore_placement = ignore;
        self
    }
}

/// Everything a map needs to draw markers: icons, sources and layers.
///
/// Implementors decide what happens when an id is registered twice.
pub trait RenderSurface {
    fn add_image(&mut self, id: &str, icon: MarkerIcon);

    fn add_source(&mut self, source: GeoJsonSource);

    fn add_layer(&mut self, layer: SymbolLayer);
}

/// In-memory style backing the map view.
///
/// Registering an id that already exists replaces the previous entry, and a
/// replaced layer keeps its drawing position.
#[derive(Debug, Default)]
pub struct MapStyle {
    images: HashMap<String, MarkerIcon>,
    sources: HashMap<String, GeoJsonSource>,
    layers: Vec<SymbolLayer>,
}

impl MapStyle {
    pub fn image(&self, id: &str) -> Option<&MarkerIcon> {
        self.images.get(id)
    }

    pub fn source(&self, id: &str) -> Option<&GeoJsonSource> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&SymbolLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Layers in drawing order.
    pub fn layers(&self) -> &[SymbolLayer] {
        &self.layers
    }
}

impl RenderSurface for MapStyle {
    fn add_image(&mut self, id: &str, icon: MarkerIcon) {
        self.images.insert(id.to_string(), icon);
    }

    fn add_source(&mut self, source: GeoJsonSource) {
        self.sources.insert(source.id.clone(), source);
    }

    fn add_layer(&mut self, layer: SymbolLayer) {
        match self.layers.iter_mut().find(|existing| existing.id == layer.id) {
            Some(existing) => *existing = layer,
            None => self.layers.push(layer),
        }
    }
}
