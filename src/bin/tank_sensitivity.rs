use clap::Parser;
use lh2_config::{DesignConfig, FuelType};
use lh2_core::spacing::sinspace;
use lh2_design::solve_tank_fraction_sweep;
use lh2_export::summary;
use lh2_transport_study::plot::{self, TankSensitivityPoint};
use lh2_transport_study::report;
use std::io::Write;
use std::path::PathBuf;

/// Sweep the tank fuel-mass fraction and chart the transport energy each
/// gravimetric efficiency demands of the hydrogen design.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tank gravimetric-efficiency sensitivity study"
)]
struct Cli {
    /// Lowest tank fuel-mass fraction in the sweep
    #[arg(long, default_value_t = 0.2221)]
    min_fraction: f64,

    /// Number of sweep points
    #[arg(long, default_value_t = 21)]
    points: usize,

    /// Airfoil polar cache directory
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Per-point summary CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/tank_sensitivity.csv")]
    output: PathBuf,

    /// Output PNG path
    #[arg(long, default_value = "figures/tank_sensitivity.png")]
    chart: PathBuf,

    /// Skip chart rendering
    #[arg(long, default_value_t = false)]
    no_chart: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Sine-spaced fractions cluster samples near the heavy-tank end; the
    // sweep runs from the all-fuel end so each warm start stays close.
    let mut fractions = sinspace(cli.min_fraction, 1.0, cli.points);
    fractions.reverse();

    let config = DesignConfig {
        fuel: FuelType::Hydrogen,
        ..DesignConfig::default()
    };
    let solutions = solve_tank_fraction_sweep(&config, &fractions, &cli.cache_dir)?;

    let mut writer = summary::writer_for_path(&cli.output)?;
    summary::write_header(writer.as_mut())?;
    let mut chart_points = Vec::with_capacity(solutions.len());
    for (fraction, solution) in fractions.iter().copied().zip(&solutions) {
        println!(
            "eta_tank = {:.4}: {}",
            fraction,
            report::solve_verdict(solution)
        );
        report::summary_record(&config, solution).write_to(writer.as_mut())?;
        chart_points.push(TankSensitivityPoint {
            fraction,
            transport_energy_mj_per_pax_km: solution.point.transport_energy_mj_per_pax_km(),
            feasible: solution.feasible,
        });
    }
    writer.flush()?;

    if !cli.no_chart {
        plot::render_tank_sensitivity(&chart_points, &cli.chart)?;
        println!("Chart written to {}", cli.chart.display());
    }
    Ok(())
}
