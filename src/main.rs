use clap::Parser;
use graphical_interface::config::Config;

/// Opens a map with a ring of markers around the given position.
///
/// # Usage
///
/// ```sh
/// cargo run -- --lat <degrees> --lon <degrees> [--radius <meters>] [--step <degrees>]
/// ```
///
/// # Example Execution
///
/// ```sh
/// cargo run -- --lat -34.608406 --lon -58.372159 --grant-location
/// cargo run -- --lat 51.5 --lon -0.12 --export ring.geojson
/// ```
///
/// # Errors
///
/// The program returns an error if:
/// - The log directory does not exist.
/// - The radius is not positive or the step does not divide 360.
/// - An export is requested without a position.
/// - The window cannot be created.
fn main() -> Result<(), String> {
    let config = Config::parse();

    let log_file = logger::init(&config.log_dir, "ring_map", config.log_level, true)
        .map_err(|e| e.to_string())?;
    log::debug!("Logging to {}", log_file.display());

    graphical_interface::run(config).map_err(|e| {
        log::error!("{}", e);
        e.to_string()
    })
}
