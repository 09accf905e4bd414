use crate::zones::DistributionResult;

use super::temperature_label_indices;

/// Markdown formatter for distributions
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format distribution as markdown. Bands are listed summit first, the way
    /// they stack on the mountain.
    pub fn format(result: &DistributionResult) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!(
            "# {} - {}\n\n",
            result.latitude_name, result.latitude_name_en
        ));
        md.push_str(&format!("**Base temperature:** {:.1}°C  \n", result.base_temperature));
        md.push_str(&format!("**Mountain height:** {} m  \n", result.mountain_height));
        md.push_str(&format!("**Lapse rate:** {}°C/100 m  \n", result.lapse_rate));
        md.push_str(&format!("**Snowline:** {}\n\n", result.snowline_status()));

        md.push_str("## Zones\n\n");
        md.push_str("| Zone | | Elevation (m) | Temperature (°C) | Color |\n");
        md.push_str("|---|---|---|---|---|\n");
        for band in result.bands.iter().rev() {
            md.push_str(&format!(
                "| {} | {} | {} - {} | {:.1} to {:.1} | `{}` |\n",
                band.name,
                band.name_en,
                band.min_elevation,
                band.max_elevation,
                band.temp_at_bottom,
                band.temp_at_top,
                band.color
            ));
        }
        md.push('\n');

        let labelled = temperature_label_indices(result.bands.len());
        if !labelled.is_empty() {
            md.push_str("## Temperature Annotations\n\n");
            for index in labelled.into_iter().rev() {
                let band = &result.bands[index];
                md.push_str(&format!(
                    "- {} ({} - {} m): {:.1}°C\n",
                    band.name_en,
                    band.min_elevation,
                    band.max_elevation,
                    band.mid_temperature()
                ));
            }
            md.push('\n');
        }

        md
    }
}
