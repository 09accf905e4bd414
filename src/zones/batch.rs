//! Parallel evaluation of many distribution queries
//!
//! Every query is independent (the engine holds no state), so batches fan out
//! across the rayon pool and come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::distribution::{distribute, DistributionResult};
use super::latitude::LatitudeBand;
use crate::error::ZoneResult;

/// One (latitude, base temperature, height) query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneQuery {
    pub latitude: LatitudeBand,
    pub base_temperature: f64,
    pub mountain_height: f64,
}

impl ZoneQuery {
    pub fn new(latitude: LatitudeBand, base_temperature: f64, mountain_height: f64) -> Self {
        Self { latitude, base_temperature, mountain_height }
    }

    pub fn run(&self) -> ZoneResult<DistributionResult> {
        distribute(self.latitude, self.base_temperature, self.mountain_height)
    }
}

/// Evaluate queries in parallel; output order matches input order.
pub fn distribute_batch(queries: &[ZoneQuery]) -> Vec<ZoneResult<DistributionResult>> {
    queries.par_iter().map(ZoneQuery::run).collect()
}

/// Distribution for each height in `heights` at a fixed latitude and base temperature.
pub fn height_sweep(
    latitude: LatitudeBand,
    base_temperature: f64,
    heights: &[f64],
) -> Vec<ZoneResult<DistributionResult>> {
    let queries: Vec<ZoneQuery> = heights
        .iter()
        .map(|&height| ZoneQuery::new(latitude, base_temperature, height))
        .collect();
    distribute_batch(&queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZoneError;

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let queries = vec![
            ZoneQuery::new(LatitudeBand::Subtropical, 15.0, 7800.0),
            ZoneQuery::new(LatitudeBand::Frigid, -5.0, 3000.0),
            ZoneQuery::new(LatitudeBand::Temperate, 30.0, -1.0),
            ZoneQuery::new(LatitudeBand::Temperate, 30.0, 500.0),
        ];
        let results = distribute_batch(&queries);
        assert_eq!(results.len(), 4);

        assert_eq!(results[0].as_ref().unwrap().snowline, 2500.0);
        assert_eq!(results[1].as_ref().unwrap().bands.len(), 1);
        assert_eq!(results[2].as_ref().unwrap_err(), &ZoneError::InvalidHeight(-1.0));
        assert_eq!(results[3].as_ref().unwrap().latitude, LatitudeBand::Temperate);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let queries: Vec<ZoneQuery> = LatitudeBand::all()
            .iter()
            .flat_map(|&lat| {
                [-3.0, 8.0, 20.0].into_iter().map(move |t| ZoneQuery::new(lat, t, 4200.0))
            })
            .collect();
        let parallel = distribute_batch(&queries);
        let sequential: Vec<_> = queries.iter().map(ZoneQuery::run).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_height_sweep() {
        let results = height_sweep(LatitudeBand::ColdTemperate, 10.0, &[500.0, 1500.0, 2500.0]);
        let band_counts: Vec<usize> = results.iter().map(|r| r.as_ref().unwrap().bands.len()).collect();
        // Snowline 2000 m: only the last mountain reaches it
        assert_eq!(band_counts, vec![1, 2, 4]);
        assert_eq!(results[2].as_ref().unwrap().bands[3].min_elevation, 2000.0);
    }

    #[test]
    fn test_empty_batch() {
        assert!(distribute_batch(&[]).is_empty());
    }
}
