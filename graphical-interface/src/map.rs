use std::time::Duration;

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    adapter::{DrawOutcome, MapIntegrationAdapter},
    config::Config,
    location::{LastKnownLocation, LocationProvider},
    permissions::{ConsentPrompt, Permissions},
    plugins,
    state::{InitEvent, InitState},
    surface::MapStyle,
    widgets::{self, WidgetConsent, WidgetNotice},
};

const INITIAL_LAT: f64 = -34.608406;
const INITIAL_LON: f64 = -58.372159;
const NOTICE_DURATION: Duration = Duration::from_millis(3500);
const PERMISSION_DENIED_MESSAGE: &str =
    "Location permission was not granted, markers cannot be placed around you.";
const NO_LOCATION_MESSAGE: &str = "Your location is not known yet, no markers were drawn.";

/// The application window: a map with the marker ring drawn over it.
///
/// Markers are drawn once, when both the location permission is granted
/// and the map style exists. Denying the permission shows a notice and then
/// closes the window.
pub struct RingMapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    style: Option<MapStyle>,
    init_state: InitState,
    permissions: ConsentPrompt,
    location: LastKnownLocation,
    adapter: MapIntegrationAdapter,
    notice: Option<WidgetNotice>,
}

impl RingMapApp {
    pub fn new(egui_ctx: Context, config: &Config, adapter: MapIntegrationAdapter) -> Self {
        install_image_loaders(&egui_ctx);
        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(config.zoom).is_err() {
            log::warn!("Zoom {} is out of range, keeping the default", config.zoom);
        }

        let mut permissions = ConsentPrompt::new(config.grant_location);
        let init_state = InitState::new(permissions.are_granted());
        if !permissions.are_granted() {
            permissions.request();
        }

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory,
            style: None,
            init_state,
            permissions,
            location: LastKnownLocation::new(config.initial_location()),
            adapter,
            notice: None,
        }
    }

    fn advance(&mut self, event: InitEvent) {
        if self.init_state.advance(event) {
            self.draw_markers();
        }

        if self.init_state.is_denied() && self.notice.is_none() {
            log::error!("Location permission denied, closing");
            self.notice = Some(WidgetNotice::new(PERMISSION_DENIED_MESSAGE, NOTICE_DURATION));
        }
    }

    fn draw_markers(&mut self) {
        let Some(style) = self.style.as_mut() else {
            return;
        };

        match self.adapter.draw_markers(style, &self.location) {
            Ok(DrawOutcome::Drawn { .. }) => {}
            Ok(DrawOutcome::NoLocation) => {
                self.notice = Some(WidgetNotice::new(NO_LOCATION_MESSAGE, NOTICE_DURATION));
            }
            Err(e) => log::error!("Could not draw the marker ring: {}", e),
        }
    }

    fn my_position(&self) -> Position {
        map_center(&self.location, self.permissions.are_granted())
    }
}

/// Where the map is centered. The location is only read once access is granted.
fn map_center<L: LocationProvider + ?Sized>(location: &L, granted: bool) -> Position {
    let known = if granted {
        location.last_known_location()
    } else {
        None
    };

    match known {
        Some(location) => Position::from_lat_lon(location.lat, location.lon),
        None => Position::from_lat_lon(INITIAL_LAT, INITIAL_LON),
    }
}

impl eframe::App for RingMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.style.is_none() {
            self.style = Some(MapStyle::default());
            self.advance(InitEvent::StyleLoaded);
        }

        WidgetConsent::show(ctx, &mut self.permissions);
        if let Some(result) = self.permissions.poll_result() {
            log::info!("Location permission answered: {:?}", result);
            self.advance(result.into());
        }

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        let my_position = self.my_position();

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let tiles = self.tiles.as_mut();

                let mut map = Map::new(Some(tiles), &mut self.map_memory, my_position);
                if let Some(style) = &self.style {
                    map = map.with_plugin(plugins::SymbolLayers::new(style));
                }

                ui.add(map);

                widgets::zoom(ui, &mut self.map_memory);
            });

        let notice_ended = self
            .notice
            .as_ref()
            .is_some_and(|notice| !notice.show(ctx));
        if notice_ended {
            self.notice = None;
            if self.init_state.is_denied() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
