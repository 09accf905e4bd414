//! Error types for zone distribution queries.

use thiserror::Error;

/// Result type alias using ZoneError.
pub type ZoneResult<T> = Result<T, ZoneError>;

/// Validation failures raised at the boundary of the engine.
///
/// The clipping passes themselves are infallible; every input is checked
/// once before any band is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoneError {
    #[error("Unknown latitude band '{0}' (expected one of: tropical, subtropical, temperate, cold-temperate, frigid)")]
    UnknownLatitudeBand(String),

    #[error("Invalid mountain height {0}: must be a finite value greater than 0")]
    InvalidHeight(f64),

    #[error("Invalid base temperature {0}: must be finite")]
    InvalidTemperature(f64),
}

impl ZoneError {
    /// True for errors caused by an unrecognised lookup key rather than a bad number.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ZoneError::UnknownLatitudeBand(_))
    }
}
