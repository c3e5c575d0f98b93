use lh2_propulsion::lines::{FluidProperties, PipeRun, analyze_pipe};
use lh2_propulsion::supply::{NetworkDemand, SupplyChain, size_network};
use lh2_propulsion::{Engine, FuelTank, ReferenceEngine, size_thrust};

#[test]
fn reference_engine_converts_catalog_units() {
    let ge9x = ReferenceEngine::ge9x();
    assert!((ge9x.thrust_n - 489_304.0).abs() < 10.0);
    assert!((ge9x.fan_diameter_m - 3.4036).abs() < 1e-3);
    assert!((ge9x.mass_kg - 9_629.8).abs() < 0.5);
    // 3600 / TSFC.
    assert!((ge9x.isp_s() - 7_346.9).abs() < 0.5);
}

#[test]
fn specific_impulse_scales_with_fuel_energy() {
    let ge9x = ReferenceEngine::ge9x();
    // Kerosene is the reference fuel, so the ratio is exactly one.
    assert!((ge9x.isp_for_fuel_s(43.02e6) - ge9x.isp_s()).abs() < 1e-9);
    // Hydrogen at 119.93 MJ/kg.
    let hydrogen_isp = ge9x.isp_for_fuel_s(119.93e6);
    assert!(
        (hydrogen_isp - 20_482.0).abs() < 50.0,
        "hydrogen isp: {}",
        hydrogen_isp
    );
}

#[test]
fn thrust_sizing_covers_cruise_drag_plus_climb_excess() {
    let sizing = size_thrust(100_000.0, 2.0, 15.0, 10.0, 100.0);
    // W/LD with W = m g.
    assert!((sizing.cruise_total_n - 65_400.0).abs() < 1e-6);
    // Plus W * (climb rate / climb speed).
    assert!((sizing.climb_total_n - 163_500.0).abs() < 1e-6);
    assert!((sizing.climb_per_engine_n - 81_750.0).abs() < 1e-6);
}

#[test]
fn engine_scaling_follows_the_thrust_ratio_exponents() {
    let reference = ReferenceEngine {
        thrust_n: 100_000.0,
        fan_diameter_m: 2.0,
        outer_diameter_m: 3.0,
        mass_kg: 5_000.0,
        tsfc_lb_lbf_hr: 0.5,
    };
    let engine = Engine::scaled_from(&reference, 400_000.0);

    assert!((engine.scale_ratio - 4.0).abs() < 1e-12);
    assert!((engine.thrust_n - 400_000.0).abs() < 1e-9);
    // Diameters grow with sqrt(ratio), mass with ratio^1.1.
    assert!((engine.fan_diameter_m - 4.0).abs() < 1e-9);
    assert!((engine.outer_diameter_m - 6.0).abs() < 1e-9);
    assert!((engine.mass_kg - 5_000.0 * 4.0f64.powf(1.1)).abs() < 1e-6);
}

#[test]
fn tank_volume_subtracts_the_wall_allowance() {
    let tank = FuelTank {
        exterior_radius_m: 2.0,
        length_m: 10.0,
        wall_thickness_m: 0.1,
    };
    assert!((tank.interior_radius_m() - 1.9).abs() < 1e-12);
    let expected_exterior = std::f64::consts::PI * 4.0 * 10.0;
    assert!((tank.exterior_volume_m3() - expected_exterior).abs() < 1e-9);
    // Wall comes off the radius and off both end domes.
    let expected_interior = std::f64::consts::PI * 1.9 * 1.9 * 9.8;
    assert!((tank.interior_volume_m3() - expected_interior).abs() < 1e-9);
    assert!((tank.fuel_mass_kg(70.0) - expected_interior * 70.0).abs() < 1e-6);
}

#[test]
fn liquid_hydrogen_line_stays_far_from_choking() {
    let run = PipeRun {
        mass_flow_rate_kg_s: 50.0,
        diameter_m: 0.5,
        length_m: 2.0,
    };
    let analysis = analyze_pipe(&run, &FluidProperties::liquid_hydrogen());

    assert!(
        (analysis.velocity_m_s - 3.705).abs() < 0.01,
        "LH2 line velocity: {}",
        analysis.velocity_m_s
    );
    assert!(analysis.reynolds > 9.9e6 && analysis.reynolds < 1.01e7);
    assert!(analysis.friction_factor > 0.0055 && analysis.friction_factor < 0.0057);
    assert!(
        analysis.pressure_loss_pa > 10.0 && analysis.pressure_loss_pa < 11.5,
        "LH2 line loss: {} Pa",
        analysis.pressure_loss_pa
    );
    assert!(analysis.pressure_loss_atm() < 1.2e-4);
    assert!(analysis.mach < 0.005);
    assert!(
        analysis.fanno_length_m > 1e5,
        "liquid line choking length should be enormous: {}",
        analysis.fanno_length_m
    );
}

#[test]
fn gaseous_hydrogen_line_runs_much_closer_to_choking() {
    let run = PipeRun {
        mass_flow_rate_kg_s: 50.0,
        diameter_m: 0.5,
        length_m: 2.0,
    };
    let gas = analyze_pipe(&run, &FluidProperties::gaseous_hydrogen());
    let liquid = analyze_pipe(&run, &FluidProperties::liquid_hydrogen());

    assert!((gas.velocity_m_s - 123.2).abs() < 0.5);
    assert!((gas.mach - 0.329).abs() < 0.005);
    assert!(
        gas.fanno_length_m > 100.0 && gas.fanno_length_m < 200.0,
        "gaseous choking length: {}",
        gas.fanno_length_m
    );
    assert!(gas.fanno_length_m > run.length_m, "run must not choke");
    assert!(gas.fanno_length_m < liquid.fanno_length_m);
}

#[test]
fn network_sizing_matches_the_published_estimate() {
    let demand = NetworkDemand::top_100_airports();
    let chain = SupplyChain::baseline();

    let fuel_kg_per_day = demand.fuel_mass_kg_per_day();
    assert!(
        fuel_kg_per_day > 4.6e7 && fuel_kg_per_day < 4.8e7,
        "daily fuel demand: {} kg",
        fuel_kg_per_day
    );
    let loss = chain.total_loss_fraction();
    assert!(loss > 8.0e-4 && loss < 9.0e-4, "chain loss: {}", loss);

    let energy = size_network(demand, chain);
    assert!(energy.produced_mass_kg_per_day > energy.fuel_mass_kg_per_day);
    assert!(
        energy.energy_twh_per_day() > 2.8 && energy.energy_twh_per_day() < 3.0,
        "daily electrolysis + liquefaction energy: {} TWh",
        energy.energy_twh_per_day()
    );
    let mean_power_gw = energy.mean_power_w() / 1e9;
    assert!(
        mean_power_gw > 115.0 && mean_power_gw < 127.0,
        "mean grid draw: {} GW",
        mean_power_gw
    );
}
