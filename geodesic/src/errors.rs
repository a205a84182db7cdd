use thiserror::Error;

/// Reasons a ring cannot be built from the requested parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    #[error("invalid radius {0} m: it must be a finite value greater than zero")]
    InvalidRadius(f64),
    #[error("invalid step {0}°: it must be between 1 and 360 and divide 360 evenly")]
    InvalidStep(u32),
}
