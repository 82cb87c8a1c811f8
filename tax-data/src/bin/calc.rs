use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tax_core::calculations::common::format_naira;
use tax_core::{RegimeRegistry, TaxCalculationResult, TaxCalculator, TaxInput};
use tax_data::{BandScheduleLoader, InputLoader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Calculate personal income tax for inputs stored in a JSON file.
///
/// The file holds one input object or an array of them, with the same
/// camelCase fields as the HTTP API. An optional CSV replaces the
/// regime's band schedule:
/// - width: how much income the band covers (empty on the last row)
/// - rate: the band rate as a decimal (e.g., 0.15)
#[derive(Parser, Debug)]
#[command(name = "tax-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON file containing taxpayer inputs
    #[arg(short, long)]
    input: PathBuf,

    /// Deduction regime to apply
    #[arg(short, long, default_value = "rent-relief")]
    regime: String,

    /// CSV file with a replacement band schedule
    #[arg(short, long)]
    bands: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_table(input: &TaxInput, result: &TaxCalculationResult) {
    if !input.has_income() {
        warn!("input has no income; the result is all zeros");
    }

    println!(
        "{} ({})",
        result.employment_type.label(),
        if result.resident { "resident" } else { "non-resident" }
    );
    println!("  Total income:       {:>16}", format_naira(result.total_income));
    if result.adjusted_business_income > Decimal::ZERO {
        println!(
            "    business (net):   {:>16}",
            format_naira(result.adjusted_business_income)
        );
    }
    if result.net_digital_income > Decimal::ZERO {
        println!(
            "    digital (net):    {:>16}",
            format_naira(result.net_digital_income)
        );
    }
    println!("  Total deductions:   {:>16}", format_naira(result.total_deductions));
    for detail in &result.detailed_deductions {
        println!("    {:<40} {:>14}", detail.name, format_naira(detail.amount));
        println!("      {}", detail.calculation);
    }
    println!("  Taxable income:     {:>16}", format_naira(result.taxable_income));
    for band in &result.band_breakdown {
        println!(
            "    {:<32} {:>5}% {:>14}",
            band.range,
            band.rate,
            format_naira(band.tax)
        );
    }
    println!("  Tax payable:        {:>16}", format_naira(result.tax_payable));
    println!(
        "  Effective rate:     {:>15.2}% ({})",
        result.effective_tax_rate,
        result.risk_level().label()
    );
    println!();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let registry = RegimeRegistry::builtin();
    let mut regime = registry.get(&args.regime)?.clone();

    if let Some(path) = &args.bands {
        info!("loading band schedule from: {}", path.display());
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let bands = BandScheduleLoader::load(file)
            .with_context(|| format!("Failed to load band schedule: {}", path.display()))?;
        debug!("loaded {} bounded bands", bands.bands.len());
        regime = regime.with_bands(bands);
    }

    let calculator = TaxCalculator::new(regime).context("Invalid tax regime")?;

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open: {}", args.input.display()))?;
    let inputs = InputLoader::load(file)
        .with_context(|| format!("Failed to load inputs: {}", args.input.display()))?;

    info!(
        "calculating {} input(s) under {}",
        inputs.len(),
        calculator.regime().name
    );

    let results: Vec<_> = inputs
        .iter()
        .map(|input| calculator.calculate(input))
        .collect();

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&results).context("Failed to serialize")?;
            println!("{json}");
        }
        Format::Table => {
            for (input, result) in inputs.iter().zip(&results) {
                print_table(input, result);
            }
        }
    }

    Ok(())
}
