use std::path::PathBuf;

use clap::Parser;
use geodesic::{Coordinate, RingError, RingSpec};
use log::LevelFilter;
use thiserror::Error;

use crate::adapter::{DEFAULT_RADIUS_M, DEFAULT_STEP_DEG};

/// Command line options of the ring map.
#[derive(Debug, Clone, Parser)]
#[command(name = "ring-map", version, about = "Shows a ring of markers around your position")]
pub struct Config {
    /// Latitude of the last known position, in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude of the last known position, in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Distance from the position to the markers, in meters
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_RADIUS_M)]
    pub radius: f64,

    /// Degrees between two consecutive markers; must divide 360
    #[arg(long, default_value_t = DEFAULT_STEP_DEG)]
    pub step: u32,

    /// Initial map zoom level
    #[arg(long, default_value_t = 12.0)]
    pub zoom: f64,

    /// Directory where ring_map.log is written
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,

    /// Most verbose log level recorded (error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Treat location access as already granted
    #[arg(long)]
    pub grant_location: bool,

    /// Keep marker longitudes outside [-180, 180] as computed
    #[arg(long)]
    pub no_normalize: bool,

    /// Write the ring as GeoJSON to this file and exit without opening a window
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is not a finite number")]
    InvalidLongitude(f64),
    #[error("zoom {0} is not a valid zoom level")]
    InvalidZoom(f64),
    #[error(transparent)]
    Ring(#[from] RingError),
}

impl Config {
    /// Checks the values clap cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lat) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ConfigError::InvalidLatitude(lat));
            }
        }
        if let Some(lon) = self.lon {
            if !lon.is_finite() {
                return Err(ConfigError::InvalidLongitude(lon));
            }
        }
        if !self.zoom.is_finite() || self.zoom < 0.0 {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        RingSpec::new(Coordinate::new(0.0, 0.0), self.radius, self.step)?;
        Ok(())
    }

    /// The position given on the command line, if both halves were given.
    pub fn initial_location(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}
