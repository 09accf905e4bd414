use serde::Serialize;

use crate::zones::{DistributionResult, SnowlineStatus};

/// Serializable view of a distribution with its snowline classification
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport<'a> {
    #[serde(flatten)]
    pub result: &'a DistributionResult,
    pub snowline_status: SnowlineStatus,
    pub snowline_display: String,
}

impl<'a> DistributionReport<'a> {
    pub fn new(result: &'a DistributionResult) -> Self {
        let status = result.snowline_status();
        Self {
            result,
            snowline_status: status,
            snowline_display: status.to_string(),
        }
    }
}

/// JSON formatter for distributions
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format distribution as pretty-printed JSON
    pub fn format(result: &DistributionResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&DistributionReport::new(result))
    }

    /// Format distribution as compact JSON (no whitespace)
    pub fn format_compact(result: &DistributionResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(&DistributionReport::new(result))
    }
}
