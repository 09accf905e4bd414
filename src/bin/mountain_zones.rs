//! Mountain Zones CLI
//!
//! Prints the vertical zone distribution for one mountain, the reference table,
//! or a sweep over summit heights.
//!
//! Run with: cargo run --bin mountain_zones -- --latitude temperate --base-temp 12 --height 4500

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mountain_zones::formatters::{JsonFormatter, MarkdownFormatter};
use mountain_zones::zones::{
    self, tables, validate_height, DEFAULT_BASE_TEMPERATURE, DEFAULT_MOUNTAIN_HEIGHT,
};
use mountain_zones::{distribute, height_sweep, LatitudeBand};

/// Upper bound on rows printed by --sweep
const MAX_SWEEP_POINTS: usize = 1000;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
    Compact,
}

/// Vertical vegetation zones of a mountain
#[derive(Parser, Debug)]
#[command(name = "mountain_zones")]
#[command(about = "Compute the vertical distribution of vegetation zones on a mountain")]
struct Args {
    /// Latitude band: tropical, subtropical, temperate, cold-temperate, frigid
    #[arg(short, long, default_value_t = zones::DEFAULT_LATITUDE.key().to_string())]
    latitude: String,

    /// Temperature at the mountain base (°C)
    #[arg(short = 't', long, default_value_t = DEFAULT_BASE_TEMPERATURE, allow_negative_numbers = true)]
    base_temp: f64,

    /// Summit elevation (m)
    #[arg(short = 'H', long, default_value_t = DEFAULT_MOUNTAIN_HEIGHT)]
    height: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Print the reference table and exit
    #[arg(long)]
    list: bool,

    /// Tabulate snowline and band count for heights STEP, 2*STEP, ... up to --height
    #[arg(long, value_name = "STEP")]
    sweep: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mountain_zones=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        print_table(args.format)?;
        return Ok(());
    }

    let latitude: LatitudeBand = args.latitude.parse()?;

    if let Some(step) = args.sweep {
        return print_sweep(latitude, args.base_temp, args.height, step);
    }

    let result = distribute(latitude, args.base_temp, args.height)?;
    let output = match args.format {
        OutputFormat::Markdown => MarkdownFormatter::format(&result),
        OutputFormat::Json => JsonFormatter::format(&result).context("Failed to serialize distribution")?,
        OutputFormat::Compact => {
            JsonFormatter::format_compact(&result).context("Failed to serialize distribution")?
        }
    };
    println!("{}", output);

    Ok(())
}

fn print_table(format: OutputFormat) -> anyhow::Result<()> {
    let configs: Vec<_> = tables::all_configs().collect();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&configs)?),
        OutputFormat::Compact => println!("{}", serde_json::to_string(&configs)?),
        OutputFormat::Markdown => {
            for config in configs {
                println!("## {} ({})\n", config.name_en, config.latitude.key());
                println!("Lapse rate: {}°C/100 m\n", config.lapse_rate);
                for band in config.bands {
                    println!(
                        "- {} / {}: {} - {} m",
                        band.name, band.name_en, band.min_elevation, band.max_elevation
                    );
                }
                println!();
            }
        }
    }
    Ok(())
}

/// Summit heights STEP, 2*STEP, ... up to `max_height`, at most `MAX_SWEEP_POINTS` of them.
fn sweep_heights(max_height: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    validate_height(max_height)?;
    if !step.is_finite() || step <= 0.0 {
        bail!("--sweep step must be a positive number, got {}", step);
    }

    let count = (max_height / step).floor();
    if count > MAX_SWEEP_POINTS as f64 {
        bail!(
            "--sweep {} over {} m gives {} heights (limit {})",
            step, max_height, count, MAX_SWEEP_POINTS
        );
    }

    Ok((1..=count as usize).map(|i| i as f64 * step).collect())
}

fn print_sweep(latitude: LatitudeBand, base_temp: f64, max_height: f64, step: f64) -> anyhow::Result<()> {
    let heights = sweep_heights(max_height, step)?;

    println!("{}", "=".repeat(60));
    println!("HEIGHT SWEEP: {} at {:.1}°C", latitude.config().name_en, base_temp);
    println!("{}", "=".repeat(60));
    println!("{:>10}  {:>12}  {:>6}  {}", "height", "snowline", "bands", "summit zone");

    for (height, result) in heights.iter().zip(height_sweep(latitude, base_temp, &heights)) {
        let result = result?;
        let summit_zone = result.bands.last().map(|b| b.name_en.as_str()).unwrap_or("-");
        println!(
            "{:>10}  {:>12}  {:>6}  {}",
            height,
            result.snowline_status().to_string(),
            result.bands.len(),
            summit_zone
        );
    }

    Ok(())
}
