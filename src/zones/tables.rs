//! Latitude Band Reference Tables
//!
//! Candidate elevation bands per latitude band, lowest first. Within a table the
//! bands are contiguous: each band's `max_elevation` equals the next band's
//! `min_elevation`, and the final snow band runs to an unbounded sentinel.
//!
//! Lapse rates are °C lost per 100 m of elevation.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::latitude::LatitudeBand;

/// Name of the topmost band; used as the sentinel for snow-band identity.
pub const SNOW_BAND_NAME: &str = "冰雪带";

/// Display color of the snow band (identical across all tables).
pub const SNOW_BAND_COLOR: &str = "#E8F4F8";

/// Upper bound of every table's final band. Taller than any real summit.
pub const MAX_ELEVATION_SENTINEL: f64 = 10_000.0;

/// A configured elevation range before clipping to a mountain or snowline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateBand {
    pub name: &'static str,
    pub name_en: &'static str,
    /// Inclusive lower bound (m)
    pub min_elevation: f64,
    /// Exclusive upper bound (m)
    pub max_elevation: f64,
    pub color: &'static str,
}

impl CandidateBand {
    pub fn is_snow(&self) -> bool {
        self.name == SNOW_BAND_NAME
    }
}

/// Immutable per-latitude configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatitudeBandConfig {
    pub latitude: LatitudeBand,
    pub name: &'static str,
    pub name_en: &'static str,
    /// °C per 100 m, positive
    pub lapse_rate: f64,
    pub bands: &'static [CandidateBand],
}

impl LatitudeBandConfig {
    /// The configured snow band (every table ends with one).
    pub fn snow_band(&self) -> &'static CandidateBand {
        self.bands
            .iter()
            .find(|band| band.is_snow())
            .unwrap_or(&SNOW_TEMPLATE)
    }
}

const fn band(
    name: &'static str,
    name_en: &'static str,
    min_elevation: f64,
    max_elevation: f64,
    color: &'static str,
) -> CandidateBand {
    CandidateBand { name, name_en, min_elevation, max_elevation, color }
}

const fn snow_band(min_elevation: f64) -> CandidateBand {
    band(SNOW_BAND_NAME, "Ice and snow belt", min_elevation, MAX_ELEVATION_SENTINEL, SNOW_BAND_COLOR)
}

static SNOW_TEMPLATE: CandidateBand = snow_band(MAX_ELEVATION_SENTINEL);

// ============================================================================
// EMBEDDED BAND TABLES
// ============================================================================

const TROPICAL_BANDS: &[CandidateBand] = &[
    band("热带雨林", "Tropical rainforest", 0.0, 1000.0, "#0B6623"),
    band("山地常绿阔叶林", "Montane evergreen broadleaf forest", 1000.0, 2000.0, "#228B22"),
    band("山地针叶林", "Montane coniferous forest", 2000.0, 3000.0, "#4A7C59"),
    band("高山灌丛", "Alpine shrubland", 3000.0, 4000.0, "#A8B9A5"),
    band("高山草甸", "Alpine meadow", 4000.0, 5000.0, "#90C090"),
    snow_band(5000.0),
];

const SUBTROPICAL_BANDS: &[CandidateBand] = &[
    band("亚热带常绿阔叶林", "Subtropical evergreen broadleaf forest", 0.0, 1200.0, "#228B22"),
    band("针叶林", "Coniferous forest", 1200.0, 2000.0, "#4A7C59"),
    band("针阔混交林", "Mixed coniferous-broadleaf forest", 2000.0, 2800.0, "#6B8E23"),
    band("高山草甸", "Alpine meadow", 2800.0, 3500.0, "#90C090"),
    band("高山灌丛", "Alpine shrubland", 3500.0, 4500.0, "#A8B9A5"),
    band("高山荒漠", "Alpine desert", 4500.0, 5500.0, "#C4A676"),
    snow_band(5500.0),
];

const TEMPERATE_BANDS: &[CandidateBand] = &[
    band("温带阔叶林", "Temperate broadleaf forest", 0.0, 800.0, "#7CB342"),
    band("针阔混交林", "Mixed coniferous-broadleaf forest", 800.0, 1800.0, "#6B8E23"),
    band("针叶林", "Coniferous forest", 1800.0, 2800.0, "#4A7C59"),
    band("高山草甸", "Alpine meadow", 2800.0, 3600.0, "#90C090"),
    band("高山灌丛", "Alpine shrubland", 3600.0, 4500.0, "#A8B9A5"),
    band("高山荒漠", "Alpine desert", 4500.0, 5200.0, "#C4A676"),
    snow_band(5200.0),
];

const COLD_TEMPERATE_BANDS: &[CandidateBand] = &[
    band("温带草原", "Temperate steppe", 0.0, 600.0, "#9ACD32"),
    band("针叶林", "Coniferous forest", 600.0, 1500.0, "#4A7C59"),
    band("高山灌丛", "Alpine shrubland", 1500.0, 2500.0, "#A8B9A5"),
    band("高山草甸", "Alpine meadow", 2500.0, 3200.0, "#90C090"),
    band("高山荒漠", "Alpine desert", 3200.0, 4000.0, "#C4A676"),
    snow_band(4000.0),
];

const FRIGID_BANDS: &[CandidateBand] = &[
    band("高山灌丛", "Alpine shrubland", 0.0, 500.0, "#A8B9A5"),
    band("高山草甸", "Alpine meadow", 500.0, 1200.0, "#90C090"),
    band("高山荒漠", "Alpine desert", 1200.0, 2000.0, "#C4A676"),
    snow_band(2000.0),
];

pub static TROPICAL: LatitudeBandConfig = LatitudeBandConfig {
    latitude: LatitudeBand::Tropical,
    name: "热带地区 (0°-25°)",
    name_en: "Tropical (0°-25°)",
    lapse_rate: 0.65,
    bands: TROPICAL_BANDS,
};

pub static SUBTROPICAL: LatitudeBandConfig = LatitudeBandConfig {
    latitude: LatitudeBand::Subtropical,
    name: "亚热带地区 (25°-35°)",
    name_en: "Subtropical (25°-35°)",
    lapse_rate: 0.6,
    bands: SUBTROPICAL_BANDS,
};

pub static TEMPERATE: LatitudeBandConfig = LatitudeBandConfig {
    latitude: LatitudeBand::Temperate,
    name: "温带地区 (35°-50°)",
    name_en: "Temperate (35°-50°)",
    lapse_rate: 0.55,
    bands: TEMPERATE_BANDS,
};

pub static COLD_TEMPERATE: LatitudeBandConfig = LatitudeBandConfig {
    latitude: LatitudeBand::ColdTemperate,
    name: "寒温带地区 (50°-60°)",
    name_en: "Cold temperate (50°-60°)",
    lapse_rate: 0.5,
    bands: COLD_TEMPERATE_BANDS,
};

pub static FRIGID: LatitudeBandConfig = LatitudeBandConfig {
    latitude: LatitudeBand::Frigid,
    name: "高寒带地区 (>60°)",
    name_en: "Frigid (>60°)",
    lapse_rate: 0.45,
    bands: FRIGID_BANDS,
};

/// All configurations, equator to pole
pub fn all_configs() -> impl Iterator<Item = &'static LatitudeBandConfig> {
    LatitudeBand::all().iter().map(|band| band.config())
}

fn config_index() -> &'static FxHashMap<&'static str, &'static LatitudeBandConfig> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static LatitudeBandConfig>> = OnceLock::new();
    INDEX.get_or_init(|| {
        all_configs()
            .map(|config| (config.latitude.key(), config))
            .collect()
    })
}

/// Look up a configuration by its canonical key (exact match).
pub fn config_by_key(key: &str) -> Option<&'static LatitudeBandConfig> {
    config_index().get(key).copied()
}
