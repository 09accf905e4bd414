//! Latitude Band Keys
//!
//! The five macro-climate zones the reference table is keyed by. Each maps to
//! exactly one `LatitudeBandConfig` with its own lapse rate and candidate bands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tables::{self, LatitudeBandConfig};
use crate::error::ZoneError;

/// Latitude band groupings (ordered equator to pole)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LatitudeBand {
    /// Below 25°: rainforest foothills, lapse rate 0.65
    Tropical,

    /// 25°-35°: evergreen broadleaf foothills, lapse rate 0.6
    Subtropical,

    /// 35°-50°: broadleaf foothills, lapse rate 0.55
    Temperate,

    /// 50°-60°: steppe foothills, lapse rate 0.5
    ColdTemperate,

    /// Above 60°: alpine scrub from the base, lapse rate 0.45
    Frigid,
}

impl LatitudeBand {
    /// Canonical lookup key (e.g. "cold-temperate")
    pub fn key(&self) -> &'static str {
        match self {
            LatitudeBand::Tropical => "tropical",
            LatitudeBand::Subtropical => "subtropical",
            LatitudeBand::Temperate => "temperate",
            LatitudeBand::ColdTemperate => "cold-temperate",
            LatitudeBand::Frigid => "frigid",
        }
    }

    /// Reference configuration for this band
    pub fn config(&self) -> &'static LatitudeBandConfig {
        match self {
            LatitudeBand::Tropical => &tables::TROPICAL,
            LatitudeBand::Subtropical => &tables::SUBTROPICAL,
            LatitudeBand::Temperate => &tables::TEMPERATE,
            LatitudeBand::ColdTemperate => &tables::COLD_TEMPERATE,
            LatitudeBand::Frigid => &tables::FRIGID,
        }
    }

    /// Get all latitude bands
    pub fn all() -> &'static [LatitudeBand] {
        &[
            LatitudeBand::Tropical,
            LatitudeBand::Subtropical,
            LatitudeBand::Temperate,
            LatitudeBand::ColdTemperate,
            LatitudeBand::Frigid,
        ]
    }
}

impl fmt::Display for LatitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LatitudeBand {
    type Err = ZoneError;

    /// Case-insensitive; `_` is accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        tables::config_by_key(&normalized)
            .map(|config| config.latitude)
            .ok_or_else(|| ZoneError::UnknownLatitudeBand(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!("subtropical".parse::<LatitudeBand>().unwrap(), LatitudeBand::Subtropical);
        assert_eq!("cold-temperate".parse::<LatitudeBand>().unwrap(), LatitudeBand::ColdTemperate);
        assert_eq!("Cold_Temperate".parse::<LatitudeBand>().unwrap(), LatitudeBand::ColdTemperate);
        assert_eq!("  FRIGID ".parse::<LatitudeBand>().unwrap(), LatitudeBand::Frigid);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "polar".parse::<LatitudeBand>().unwrap_err();
        assert_eq!(err, ZoneError::UnknownLatitudeBand("polar".to_string()));
        assert!("".parse::<LatitudeBand>().is_err());
    }

    #[test]
    fn test_key_round_trip() {
        for band in LatitudeBand::all() {
            assert_eq!(band.key().parse::<LatitudeBand>().unwrap(), *band);
            assert_eq!(band.config().latitude, *band);
            assert_eq!(band.to_string(), band.key());
        }
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&LatitudeBand::ColdTemperate).unwrap();
        assert_eq!(json, "\"cold-temperate\"");
        let band: LatitudeBand = serde_json::from_str("\"frigid\"").unwrap();
        assert_eq!(band, LatitudeBand::Frigid);
    }
}
