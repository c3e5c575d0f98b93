use clap::Parser;
use csv::ReaderBuilder;
use lh2_config::FuelType;
use lh2_core::units;
use lh2_design::CoveragePoint;
use lh2_transport_study::plot::{self, CoverageCurve};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Render the market-coverage chart from a coverage CSV produced by the
/// market_coverage binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Market-coverage chart renderer")]
struct Cli {
    /// Coverage CSV produced by market_coverage
    #[arg(long, default_value = "artifacts/market_coverage.csv")]
    input: PathBuf,

    /// Output PNG path
    #[arg(long, default_value = "figures/market_coverage.png")]
    output: PathBuf,

    /// Design ranges (nmi) to draw, comma separated
    #[arg(long, default_value = "3750,7500", value_delimiter = ',')]
    design_ranges_nmi: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&cli.input)?;
    let headers = reader.headers()?.clone();
    let fuel_col = column(&headers, "fuel")?;
    let design_col = column(&headers, "design_range_nmi")?;
    let range_col = column(&headers, "range_nmi")?;
    let te_col = column(&headers, "transport_energy_mj_per_pax_km")?;

    // Keyed by fuel label and whole-nmi design range to keep float keys out
    // of the map.
    let mut curves: BTreeMap<(String, i64), CoverageCurve> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let fuel_label = record.get(fuel_col).unwrap_or("").to_string();
        let fuel: FuelType = fuel_label.parse()?;
        let design_range_nmi = parse_field(&record, design_col)?;
        let range_nmi = parse_field(&record, range_col)?;
        let transport_energy = parse_field(&record, te_col)?;

        let curve = curves
            .entry((fuel_label, design_range_nmi.round() as i64))
            .or_insert_with(|| CoverageCurve {
                fuel,
                design_range_nmi,
                class_label: class_label(fuel, design_range_nmi),
                points: Vec::new(),
            });
        curve.points.push(CoveragePoint {
            range_m: range_nmi * units::NAUTICAL_MILE,
            transport_energy_mj_per_pax_km: transport_energy,
        });
    }

    let selected: Vec<CoverageCurve> = curves
        .into_values()
        .filter(|curve| {
            cli.design_ranges_nmi
                .iter()
                .any(|&range| (curve.design_range_nmi - range).abs() < 1.0)
        })
        .collect();
    if selected.is_empty() {
        return Err(anyhow::anyhow!(
            "No curves matching the requested design ranges in {}",
            cli.input.display()
        ));
    }

    plot::render_market_coverage(&selected, &cli.output)?;
    println!("Chart written to {}", cli.output.display());
    Ok(())
}

/// Airliner class the kerosene designs are benchmarked against.
fn class_label(fuel: FuelType, design_range_nmi: f64) -> Option<String> {
    if fuel != FuelType::JetA {
        return None;
    }
    if (design_range_nmi - 3750.0).abs() < 1.0 {
        Some("B737-class".to_string())
    } else if (design_range_nmi - 7500.0).abs() < 1.0 {
        Some("B777-class".to_string())
    } else {
        None
    }
}

fn column(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found in coverage CSV", name))
}

fn parse_field(record: &csv::StringRecord, index: usize) -> anyhow::Result<f64> {
    let raw = record.get(index).unwrap_or("");
    raw.trim()
        .parse::<f64>()
        .map_err(|_| anyhow::anyhow!("Could not parse '{}' as a number", raw))
}
