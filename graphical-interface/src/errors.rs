use thiserror::Error;

use crate::{adapter::AdapterError, config::ConfigError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("no location is known, pass --lat and --lon")]
    NoLocation,
    #[error("could not serialize the markers: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("window error: {0}")]
    Gui(#[from] eframe::Error),
}
