use clap::Parser;
use lh2_config::{DesignConfig, FuelType};
use lh2_core::units;
use lh2_design::{off_design_coverage, solve_range_family};
use lh2_export::summary;
use lh2_transport_study::report;
use std::io::Write;
use std::path::PathBuf;

/// Solve a family of designs per candidate fuel across the design-range grid,
/// then tabulate each solved airplane's off-design coverage curve.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Design-family sweep and off-design coverage CSV"
)]
struct Cli {
    /// Design mission ranges in nautical miles, comma separated
    #[arg(long, default_value = "2000,3750,5500,7500", value_delimiter = ',')]
    ranges_nmi: Vec<f64>,

    /// Samples per branch of each off-design coverage curve
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Airfoil polar cache directory
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Coverage CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/market_coverage.csv")]
    output: PathBuf,

    /// Per-design summary CSV file
    #[arg(long, default_value = "artifacts/market_designs.csv")]
    summary: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut coverage_writer = summary::writer_for_path(&cli.output)?;
    summary::write_coverage_header(coverage_writer.as_mut())?;
    let mut summary_writer = summary::writer_for_path(&cli.summary)?;
    summary::write_header(summary_writer.as_mut())?;

    for fuel in [FuelType::JetA, FuelType::Hydrogen] {
        let config = DesignConfig {
            fuel,
            ..DesignConfig::default()
        };
        let solutions = solve_range_family(&config, &cli.ranges_nmi, &cli.cache_dir)?;
        for (design_range_nmi, solution) in cli.ranges_nmi.iter().copied().zip(&solutions) {
            println!(
                "{} {:.0} nmi: {}",
                fuel.label(),
                design_range_nmi,
                report::solve_verdict(solution)
            );
            report::summary_record(&config, solution).write_to(summary_writer.as_mut())?;

            for point in off_design_coverage(&solution.point, cli.samples) {
                summary::CoverageRecord {
                    fuel: fuel.label(),
                    design_range_nmi,
                    range_nmi: point.range_m / units::NAUTICAL_MILE,
                    transport_energy_mj_per_pax_km: point.transport_energy_mj_per_pax_km,
                }
                .write_to(coverage_writer.as_mut())?;
            }
        }
    }
    coverage_writer.flush()?;
    summary_writer.flush()?;

    println!("Coverage curves written to {}", cli.output.display());
    Ok(())
}
