use clap::Parser;
use lh2_propulsion::lines::{FluidProperties, PipeRun, analyze_pipe};

/// Report friction pressure losses and the Fanno choking margin for an
/// airport hydrogen feeder line, in both delivery phases.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fuel-line pressure-loss and choking report"
)]
struct Cli {
    /// Fuel mass flow in kg/s
    #[arg(long, default_value_t = 50.0)]
    mass_flow: f64,

    /// Pipe inner diameter in meters
    #[arg(long, default_value_t = 0.5)]
    diameter: f64,

    /// Pipe length in meters
    #[arg(long, default_value_t = 2.0)]
    length: f64,
}

fn main() {
    let cli = Cli::parse();
    let run = PipeRun {
        mass_flow_rate_kg_s: cli.mass_flow,
        diameter_m: cli.diameter,
        length_m: cli.length,
    };

    for (phase, fluid) in [
        ("Liquid hydrogen", FluidProperties::liquid_hydrogen()),
        ("Gaseous hydrogen", FluidProperties::gaseous_hydrogen()),
    ] {
        let analysis = analyze_pipe(&run, &fluid);
        println!("=== {phase} ===");
        println!("Velocity: {:.2} m/s", analysis.velocity_m_s);
        println!("Dynamic pressure: {:.1} Pa", analysis.dynamic_pressure_pa);
        println!("Reynolds number: {:.3e}", analysis.reynolds);
        println!("Friction factor: {:.5}", analysis.friction_factor);
        println!(
            "Pressure loss: {:.1} Pa ({:.4} atm)",
            analysis.pressure_loss_pa,
            analysis.pressure_loss_atm()
        );
        println!("Mach number: {:.4}", analysis.mach);
        println!(
            "Fanno choking length: {:.1} m (4fL*/D = {:.3})",
            analysis.fanno_length_m, analysis.fanno_parameter
        );
        println!();
    }
}
