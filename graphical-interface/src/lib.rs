use std::{fs, path::Path};

use adapter::MapIntegrationAdapter;
use config::Config;
use geodesic::Coordinate;

pub mod adapter;
pub mod config;
mod errors;
pub mod features;
pub mod location;
mod map;
pub mod permissions;
mod plugins;
pub mod state;
pub mod surface;
mod widgets;
pub use errors::AppError;
use map::RingMapApp;

/// Validates the configuration and either exports the ring or opens the map window.
pub fn run(config: Config) -> Result<(), AppError> {
    config.validate()?;
    let adapter = MapIntegrationAdapter::new(config.radius, config.step, !config.no_normalize)?;

    if let Some(path) = &config.export {
        return export_ring(&adapter, config.initial_location(), path).map(|_| ());
    }

    eframe::run_native(
        "Ring Map",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(RingMapApp::new(
                cc.egui_ctx.clone(),
                &config,
                adapter,
            )))
        }),
    )?;
    Ok(())
}

/// Writes the ring around `location` to `path` as GeoJSON.
///
/// Returns the number of features written, center included.
pub fn export_ring(
    adapter: &MapIntegrationAdapter,
    location: Option<Coordinate>,
    path: &Path,
) -> Result<usize, AppError> {
    let Some(center) = location else {
        log::warn!("No known location, nothing to export");
        return Err(AppError::NoLocation);
    };

    let features = adapter.ring_features(center)?;
    fs::write(path, features.to_geojson()?)?;
    log::info!("Wrote {} features to {}", features.len(), path.display());

    Ok(features.len())
}
