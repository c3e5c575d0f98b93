use clap::Parser;
use lh2_config::{DesignConfig, Objective, load_design};
use lh2_design::DesignProblem;
use lh2_export::{breakdown, summary};
use lh2_transport_study::{plot, report};
use std::io::Write;
use std::path::PathBuf;

/// Solve one design point and emit the text report, the CSV summary row, the
/// mass-breakdown sidecar, and the per-design figures.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Single design-point sizing (LH2 transport study)"
)]
struct Cli {
    /// Design configuration file (TOML or YAML); the flags below apply when
    /// no file is given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fuel selection (hydrogen | jet_a)
    #[arg(long, default_value = "hydrogen")]
    fuel: String,

    /// Passenger count
    #[arg(long, default_value_t = 400.0)]
    n_pax: f64,

    /// Design mission range in nautical miles
    #[arg(long, default_value_t = 7500.0)]
    range_nmi: f64,

    /// Objective to minimize (fwd_tank_length | togw)
    #[arg(long)]
    objective: Option<String>,

    /// Airfoil polar cache directory
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Summary CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/design_point.csv")]
    summary: PathBuf,

    /// Mass-breakdown JSON sidecar
    #[arg(long, default_value = "artifacts/mass_breakdown.json")]
    breakdown: PathBuf,

    /// Directory for rendered figures
    #[arg(long, default_value = "figures")]
    figures: PathBuf,

    /// Skip figure rendering
    #[arg(long, default_value_t = false)]
    no_figures: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_design(path)?,
        None => DesignConfig {
            fuel: cli.fuel.parse()?,
            n_pax: cli.n_pax,
            mission_range_nmi: cli.range_nmi,
            ..DesignConfig::default()
        },
    };
    if let Some(objective) = cli.objective.as_deref() {
        config.objective = parse_objective(objective)?;
    }

    let problem = DesignProblem::new(config, &cli.cache_dir)?;
    let solution = problem.solve()?;
    if !solution.feasible {
        eprintln!("warning: {}", report::solve_verdict(&solution));
    }

    print!("{}", report::design_report(&solution));

    let config = problem.config();
    let point = &solution.point;

    let mut writer = summary::writer_for_path(&cli.summary)?;
    summary::write_header(writer.as_mut())?;
    report::summary_record(config, &solution).write_to(writer.as_mut())?;
    writer.flush()?;

    breakdown::write_sidecar(
        &cli.breakdown,
        &breakdown::Metadata {
            fuel: config.fuel.label(),
            n_pax: config.n_pax,
            mission_range_nmi: config.mission_range_nmi,
            status: &solution.status,
            feasible: solution.feasible,
        },
        &point.breakdown,
    )?;

    if !cli.no_figures {
        plot::render_efficiency_polar(
            point,
            problem.polars(),
            &cli.figures.join("efficiency_polar.png"),
        )?;
        plot::render_mass_budget(point, &cli.figures.join("mass_budget.png"))?;
        println!();
        println!("Figures written to {}", cli.figures.display());
    }

    Ok(())
}

fn parse_objective(name: &str) -> anyhow::Result<Objective> {
    match name.trim().to_ascii_lowercase().as_str() {
        "fwd_tank_length" => Ok(Objective::FwdTankLength),
        "togw" => Ok(Objective::Togw),
        other => Err(anyhow::anyhow!(
            "Unknown objective '{}' (expected fwd_tank_length or togw)",
            other
        )),
    }
}
