//! Zone Distribution Engine
//!
//! Turns a latitude band's candidate table into the realized bands of one
//! mountain. Two independent clipping passes run over the table:
//!
//! 1. **Geometry**: drop bands starting at or above the summit, cap the rest at
//!    the summit, and discard zero-height remnants.
//! 2. **Snowline**: when the freezing elevation lies on the mountain, nothing but
//!    the snow band may exist above it. Straddling bands are truncated, bands
//!    entirely above are removed, and the snow band is pulled down to start at
//!    the snowline (or synthesized if the summit never reached its configured
//!    start).
//!
//! A base temperature at or below 0 °C short-circuits both passes: the whole
//! mountain is a single snow band.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::climate::{compute_snowline, compute_temperature, SnowlineStatus};
use super::latitude::LatitudeBand;
use super::tables::{CandidateBand, LatitudeBandConfig};
use crate::error::{ZoneError, ZoneResult};

/// A candidate band after clipping, with boundary temperatures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizedBand {
    pub name: String,
    pub name_en: String,
    pub color: String,
    pub min_elevation: f64,
    pub max_elevation: f64,
    /// °C at `min_elevation`
    pub temp_at_bottom: f64,
    /// °C at `max_elevation`
    pub temp_at_top: f64,
    pub is_snow: bool,
}

impl RealizedBand {
    fn from_span(span: &Span, base_temperature: f64, lapse_rate: f64) -> Self {
        Self {
            name: span.band.name.to_string(),
            name_en: span.band.name_en.to_string(),
            color: span.band.color.to_string(),
            min_elevation: span.min,
            max_elevation: span.max,
            temp_at_bottom: compute_temperature(span.min, base_temperature, lapse_rate),
            temp_at_top: compute_temperature(span.max, base_temperature, lapse_rate),
            is_snow: span.band.is_snow(),
        }
    }

    pub fn thickness(&self) -> f64 {
        self.max_elevation - self.min_elevation
    }

    /// Mean of the boundary temperatures (used for band annotations)
    pub fn mid_temperature(&self) -> f64 {
        (self.temp_at_bottom + self.temp_at_top) / 2.0
    }

    pub fn is_snow_band(&self) -> bool {
        self.is_snow
    }
}

/// Realized bands of one mountain, ascending by elevation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub latitude: LatitudeBand,
    pub latitude_name: String,
    pub latitude_name_en: String,
    pub base_temperature: f64,
    pub mountain_height: f64,
    pub bands: Vec<RealizedBand>,
    /// Freezing elevation (m); 0 when the base is at or below freezing
    pub snowline: f64,
    /// °C per 100 m
    pub lapse_rate: f64,
}

impl DistributionResult {
    pub fn snowline_status(&self) -> SnowlineStatus {
        SnowlineStatus::classify(self.snowline, self.mountain_height)
    }

    /// The snow band, if the mountain reaches one
    pub fn snow_band(&self) -> Option<&RealizedBand> {
        self.bands.iter().find(|band| band.is_snow)
    }

    /// Top of the highest band
    pub fn summit(&self) -> f64 {
        self.bands.last().map(|band| band.max_elevation).unwrap_or(0.0)
    }
}

/// Working interval over a candidate band. Bands keep a reference to their
/// template until temperatures are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    band: &'static CandidateBand,
    min: f64,
    max: f64,
}

type Spans = SmallVec<[Span; 8]>;

/// Compute the zone distribution for a latitude key (e.g. "subtropical").
pub fn get_zone_distribution(
    latitude_key: &str,
    base_temperature: f64,
    mountain_height: f64,
) -> ZoneResult<DistributionResult> {
    let latitude: LatitudeBand = latitude_key.parse()?;
    distribute(latitude, base_temperature, mountain_height)
}

/// Compute the zone distribution for an already-resolved latitude band.
pub fn distribute(
    latitude: LatitudeBand,
    base_temperature: f64,
    mountain_height: f64,
) -> ZoneResult<DistributionResult> {
    validate_height(mountain_height)?;
    if !base_temperature.is_finite() {
        return Err(ZoneError::InvalidTemperature(base_temperature));
    }

    let config = latitude.config();
    let snowline = compute_snowline(base_temperature, config.lapse_rate);

    let spans = if base_temperature <= 0.0 {
        // Freezing at the base: the snow band owns the whole mountain
        let mut spans = Spans::new();
        spans.push(Span { band: config.snow_band(), min: 0.0, max: mountain_height });
        spans
    } else {
        let clipped = clip_to_height(config.bands, mountain_height);
        let mut spans = if snowline > 0.0 && snowline < mountain_height {
            clip_to_snowline(clipped, snowline, mountain_height, config.snow_band())
        } else {
            clipped
        };
        spans.sort_by(|a, b| a.min.total_cmp(&b.min));
        spans
    };

    let result = assemble(config, base_temperature, mountain_height, snowline, &spans);

    tracing::debug!(
        latitude = %latitude,
        base_temperature,
        mountain_height,
        snowline,
        bands = result.bands.len(),
        "computed zone distribution"
    );

    Ok(result)
}

/// Reject heights outside the elevation domain (finite and above 0).
pub fn validate_height(mountain_height: f64) -> ZoneResult<()> {
    if !mountain_height.is_finite() || mountain_height <= 0.0 {
        return Err(ZoneError::InvalidHeight(mountain_height));
    }
    Ok(())
}

/// Geometry pass: keep bands starting below the summit, capped at the summit.
///
/// The final candidate's upper bound is a sentinel, not a real limit; it always
/// extends to the summit so summits above the sentinel are still covered.
fn clip_to_height(bands: &'static [CandidateBand], mountain_height: f64) -> Spans {
    let last = bands.len().saturating_sub(1);
    bands
        .iter()
        .enumerate()
        .filter(|(_, band)| band.min_elevation < mountain_height)
        .map(|(i, band)| Span {
            band,
            min: band.min_elevation,
            max: if i == last { mountain_height } else { band.max_elevation.min(mountain_height) },
        })
        .filter(|span| span.max > span.min)
        .collect()
}

/// Snowline pass. Caller guarantees `0 < snowline < mountain_height`.
fn clip_to_snowline(
    spans: Spans,
    snowline: f64,
    mountain_height: f64,
    snow_band: &'static CandidateBand,
) -> Spans {
    let mut clipped: Spans = spans
        .into_iter()
        .filter_map(|span| {
            let is_snow = span.band.is_snow();
            if span.min >= snowline {
                if is_snow {
                    Some(Span { min: snowline, ..span })
                } else {
                    tracing::trace!(band = span.band.name_en, snowline, "band above snowline removed");
                    None
                }
            } else if span.max > snowline && !is_snow {
                Some(Span { max: snowline, ..span })
            } else {
                Some(span)
            }
        })
        .collect();

    if !clipped.iter().any(|span| span.band.is_snow()) {
        clipped.push(Span { band: snow_band, min: snowline, max: mountain_height });
    }

    clipped
}

fn assemble(
    config: &LatitudeBandConfig,
    base_temperature: f64,
    mountain_height: f64,
    snowline: f64,
    spans: &[Span],
) -> DistributionResult {
    DistributionResult {
        latitude: config.latitude,
        latitude_name: config.name.to_string(),
        latitude_name_en: config.name_en.to_string(),
        base_temperature,
        mountain_height,
        bands: spans
            .iter()
            .map(|span| RealizedBand::from_span(span, base_temperature, config.lapse_rate))
            .collect(),
        snowline,
        lapse_rate: config.lapse_rate,
    }
}
