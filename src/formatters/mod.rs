//! Output formatters for zone distributions
//!
//! The engine only produces band records; everything here is presentation.

pub mod json;
pub mod markdown;

pub use json::{DistributionReport, JsonFormatter};
pub use markdown::MarkdownFormatter;

/// Indices of bands that get a temperature annotation: the lowest, the highest
/// and every even index in between. Keeps labels from crowding on tall stacks.
pub fn temperature_label_indices(band_count: usize) -> Vec<usize> {
    (0..band_count)
        .filter(|&i| i == 0 || i + 1 == band_count || i % 2 == 0)
        .collect()
}
