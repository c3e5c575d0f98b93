use clap::Parser;
use lh2_propulsion::supply::{NetworkDemand, SupplyChain, size_network};

/// Size the ground-side electrical demand of converting an airline network to
/// hydrogen: fuel mass per day through electrolysis and liquefaction, with
/// supply-chain losses applied.
#[derive(Parser, Debug)]
#[command(author, version, about = "Hydrogen network energy sizing")]
struct Cli {
    /// Passenger demand served per day, in pax-km (default: top-100 airports)
    #[arg(long)]
    pax_km_per_day: Option<f64>,

    /// Fuel burn per passenger-kilometre, in kg (default: point design)
    #[arg(long)]
    fuel_kg_per_pax_km: Option<f64>,
}

fn main() {
    let cli = Cli::parse();

    let mut demand = NetworkDemand::top_100_airports();
    if let Some(value) = cli.pax_km_per_day {
        demand.pax_km_per_day = value;
    }
    if let Some(value) = cli.fuel_kg_per_pax_km {
        demand.fuel_kg_per_pax_km = value;
    }
    let network = size_network(demand, SupplyChain::baseline());

    println!("=== Hydrogen Network Energy ===");
    println!("Fuel demand: {:.3e} kg/day", network.fuel_mass_kg_per_day);
    println!(
        "Production after losses: {:.3e} kg/day",
        network.produced_mass_kg_per_day
    );
    println!("Supply-chain loss fraction: {:.5}", network.loss_fraction);
    println!(
        "Electrolysis + liquefaction energy: {:.3} TWh/day",
        network.energy_twh_per_day()
    );
    println!(
        "Mean electrical power: {:.1} GW",
        network.mean_power_w() / 1e9
    );
}
