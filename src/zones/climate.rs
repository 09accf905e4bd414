//! Temperature and snowline math
//!
//! Linear lapse-rate model: temperature falls by `lapse_rate` °C for every
//! 100 m of elevation above the base.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature (°C) at `elevation` given the base temperature at elevation 0.
#[inline]
pub fn compute_temperature(elevation: f64, base_temperature: f64, lapse_rate: f64) -> f64 {
    base_temperature - elevation * lapse_rate / 100.0
}

/// Elevation (m) at which the temperature reaches 0 °C, rounded to whole metres.
///
/// Returns 0 when the base is already at or below freezing, which callers treat
/// as "the whole mountain is snow".
pub fn compute_snowline(base_temperature: f64, lapse_rate: f64) -> f64 {
    if base_temperature <= 0.0 {
        return 0.0;
    }
    (base_temperature / lapse_rate * 100.0).round()
}

/// Where the snowline sits relative to a mountain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "elevation", rename_all = "snake_case")]
pub enum SnowlineStatus {
    /// Base at or below freezing; no snowline is drawn
    Absent,

    /// Snowline lies on the mountain (0 < snowline < height)
    BelowSummit(f64),

    /// Snowline is at or above the summit; no snow cap from temperature alone
    AboveSummit(f64),
}

impl SnowlineStatus {
    pub fn classify(snowline: f64, mountain_height: f64) -> Self {
        if snowline <= 0.0 {
            SnowlineStatus::Absent
        } else if snowline < mountain_height {
            SnowlineStatus::BelowSummit(snowline)
        } else {
            SnowlineStatus::AboveSummit(mountain_height)
        }
    }

    /// True when the snowline clips the band table
    pub fn is_on_mountain(&self) -> bool {
        matches!(self, SnowlineStatus::BelowSummit(_))
    }
}

impl fmt::Display for SnowlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnowlineStatus::Absent => f.write_str("none"),
            SnowlineStatus::BelowSummit(snowline) => write!(f, "{} m", snowline),
            SnowlineStatus::AboveSummit(height) => write!(f, "> {} m", height),
        }
    }
}
