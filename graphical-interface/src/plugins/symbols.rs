use egui::{Color32, Image, Pos2, Rect, Response, Vec2};
use walkers::{Plugin, Projector};

use crate::surface::MapStyle;

const FALLBACK_SIZE: Vec2 = Vec2::new(10.0, 10.0);

/// Draws every symbol layer of a [`MapStyle`] on top of the map.
pub struct SymbolLayers<'a> {
    style: &'a MapStyle,
}

impl<'a> SymbolLayers<'a> {
    pub fn new(style: &'a MapStyle) -> Self {
        Self { style }
    }
}

impl Plugin for SymbolLayers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let mut placement = Placement::default();

        for layer in self.style.layers() {
            let Some(source) = self.style.source(&layer.source_id) else {
                continue;
            };
            let icon = layer
                .icon_image
                .as_deref()
                .and_then(|icon_id| self.style.image(icon_id));

            for feature in source.features.iter() {
                let screen_position = projector.project(feature.geometry).to_pos2();
                let symbol_size = icon.map_or(FALLBACK_SIZE, |icon| icon.size);
                let rect = icon_rect(screen_position, symbol_size);

                if !placement.place(rect, layer.icon_allow_overlap, layer.icon_ignore_placement) {
                    continue;
                }

                match icon {
                    Some(icon) => {
                        let image = Image::new(icon.image.clone()).fit_to_exact_size(symbol_size);
                        ui.put(rect, image);
                    }
                    None => {
                        ui.painter().circle_filled(
                            screen_position,
                            FALLBACK_SIZE.x / 2.0,
                            Color32::from_rgb(59, 178, 208),
                        );
                    }
                }
            }
        }
    }
}

/// The icon's bottom center sits on the feature, like a pin.
fn icon_rect(anchor: Pos2, size: Vec2) -> Rect {
    Rect::from_min_size(anchor - Vec2::new(size.x / 2.0, size.y), size)
}

/// Screen space already claimed by drawn icons during one frame.
#[derive(Debug, Default)]
struct Placement {
    occupied: Vec<Rect>,
}

impl Placement {
    /// Decides whether an icon covering `rect` is drawn.
    ///
    /// With `allow_overlap` the icon is drawn even over claimed space. With
    /// `ignore_placement` it does not claim space for the icons that follow.
    fn place(&mut self, rect: Rect, allow_overlap: bool, ignore_placement: bool) -> bool {
        let collides = self.occupied.iter().any(|other| other.intersects(rect));
        if collides && !allow_overlap {
            return false;
        }
        if !ignore_placement {
            self.occupied.push(rect);
        }
        true
    }
}
