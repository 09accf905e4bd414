//! Mountain Zones
//!
//! Vertical distribution of vegetation zones on a mountain, driven by latitude
//! band, base temperature and summit height.
//!
//! - `zones/`: Reference tables and the distribution engine
//! - `formatters/`: JSON and Markdown output
//! - `api_server`: Axum HTTP API (feature `api`)

pub mod error;
pub mod zones;
pub mod formatters;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{ZoneError, ZoneResult};
pub use zones::{
    compute_snowline, compute_temperature, distribute, distribute_batch, get_zone_distribution,
    height_sweep, DistributionResult, LatitudeBand, LatitudeBandConfig, RealizedBand,
    SnowlineStatus, ZoneQuery,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
