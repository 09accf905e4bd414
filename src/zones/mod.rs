//! Zone Distribution Engine
//!
//! Computes the vertical distribution of vegetation zones on a mountain from a
//! latitude band, the base temperature and the summit height.
//!
//! ## Architecture
//! - `latitude.rs` - LatitudeBand keys (tropical .. frigid)
//! - `tables.rs` - Static candidate band tables and lapse rates
//! - `climate.rs` - Lapse-rate temperature and snowline math
//! - `distribution.rs` - Height and snowline clipping, result assembly
//! - `batch.rs` - Parallel evaluation of independent queries

pub mod latitude;
pub mod tables;
pub mod climate;
pub mod distribution;
pub mod batch;

// Re-export public API
pub use latitude::LatitudeBand;
pub use tables::{CandidateBand, LatitudeBandConfig, SNOW_BAND_NAME, SNOW_BAND_COLOR};
pub use climate::{compute_temperature, compute_snowline, SnowlineStatus};
pub use distribution::{get_zone_distribution, distribute, validate_height, DistributionResult, RealizedBand};
pub use batch::{distribute_batch, height_sweep, ZoneQuery};

/// Initial simulator parameters, shared by the CLI and HTTP defaults
pub const DEFAULT_LATITUDE: LatitudeBand = LatitudeBand::Subtropical;
pub const DEFAULT_BASE_TEMPERATURE: f64 = 15.0;
pub const DEFAULT_MOUNTAIN_HEIGHT: f64 = 7800.0;
