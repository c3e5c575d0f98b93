//! End-to-end sizing runs: solve the baseline configurations and check that
//! the converged designs actually close.

use lh2_config::{DesignConfig, FuelType};
use lh2_core::units;
use lh2_design::{
    DesignProblem, DesignValues, off_design_coverage, solve_range_family,
    solve_tank_fraction_sweep,
};
use lh2_transport_study::report::solve_verdict;

const MISSION_RANGE_NMI: f64 = 7500.0;
const N_PAX: f64 = 400.0;
// Worst-case slack the scaled weight-closure constraint leaves open (kg).
const WEIGHT_CLOSURE_SLACK_KG: f64 = 150.0;

#[test]
fn baseline_point_evaluates_without_solving() {
    let dir = tempfile::tempdir().expect("tempdir");
    let problem =
        DesignProblem::new(DesignConfig::default(), dir.path()).expect("problem setup");
    let point = problem.design_point(&DesignValues::baseline());

    assert!(
        point.computed_togw_kg().is_finite() && point.computed_togw_kg() > 0.0,
        "mass buildup should produce a finite gross weight, got {}",
        point.computed_togw_kg()
    );
    assert_eq!(point.computed_togw_kg(), point.breakdown.togw().mass_kg);
    assert!(point.empty_mass_kg() > 0.0);
    assert!(point.empty_mass_kg() < point.computed_togw_kg());
    assert!(point.fuel_mass_kg() > 0.0);
    assert!(point.flight_range_m > 0.0);
    assert!(point.aero.lift_n > 0.0, "baseline cruises at positive alpha");
    assert!(point.lift_to_drag() > 1.0);
}

#[test]
fn hydrogen_baseline_closes_and_meets_mission() {
    let dir = tempfile::tempdir().expect("tempdir");
    let problem =
        DesignProblem::new(DesignConfig::default(), dir.path()).expect("problem setup");
    let solution = problem.solve().expect("solve");
    let point = &solution.point;

    assert!(
        solution.feasible,
        "baseline hydrogen design should converge feasibly, status {} violation {:.3e}",
        solution.status, solution.max_constraint_violation
    );
    assert!(solution.max_constraint_violation <= 1.0e-3);
    assert!(
        solve_verdict(&solution).starts_with("solver converged"),
        "verdict: {}",
        solve_verdict(&solution)
    );

    // Weight closure: the assumed gross weight covers the bottom-up buildup.
    let design_togw = point.values.design_togw_kg;
    let computed_togw = point.computed_togw_kg();
    assert!(
        computed_togw <= design_togw + WEIGHT_CLOSURE_SLACK_KG,
        "computed {computed_togw:.0} kg exceeds design {design_togw:.0} kg"
    );
    assert!(
        (150.0e3..500.0e3).contains(&design_togw),
        "gross weight {design_togw:.0} kg outside the B777-class window"
    );

    // Range closure: full-fuel Breguet range reaches the design mission.
    let flight_range_nmi = point.flight_range_nmi();
    assert!(
        flight_range_nmi >= 0.985 * MISSION_RANGE_NMI,
        "flight range {flight_range_nmi:.0} nmi falls short of the mission"
    );
    assert!(
        flight_range_nmi <= 1.35 * MISSION_RANGE_NMI,
        "tank-length objective should not leave {flight_range_nmi:.0} nmi of slack range"
    );

    // Cruise trim: lift carries the half-fuel weight.
    let half_fuel_kg = point.breakdown.half_fuel().mass_kg;
    let weight_n = lh2_core::constants::G * half_fuel_kg;
    assert!(
        (point.aero.lift_n - weight_n).abs() <= 3.0e3,
        "lift {:.0} N vs half-fuel weight {:.0} N",
        point.aero.lift_n,
        weight_n
    );

    // The free variables stay inside their declared bounds.
    let v = &point.values;
    assert!(v.fwd_tank_length_m > 0.5 && v.fwd_tank_length_m < 30.0);
    assert!(v.mach > 0.4 && v.mach < 1.0, "cruise mach {}", v.mach);
    assert!(
        v.altitude_m > units::ft_to_m(20.0e3) && v.altitude_m < units::ft_to_m(60.0e3),
        "cruise altitude {:.0} m outside the jet-transport band",
        v.altitude_m
    );
    assert!((0.0..=15.0).contains(&v.alpha_deg));

    // Default objective is the forward tank length itself.
    assert!(
        (solution.objective - v.fwd_tank_length_m).abs() < 1.0e-6,
        "objective {} vs tank length {}",
        solution.objective,
        v.fwd_tank_length_m
    );

    let ld = point.lift_to_drag();
    assert!((10.0..30.0).contains(&ld), "cruise L/D {ld:.1}");

    let te = point.transport_energy_mj_per_pax_km();
    assert!(
        (0.4..2.0).contains(&te),
        "transport energy {te:.3} MJ/pax-km outside the plausible band"
    );
}

#[test]
fn kerosene_variant_needs_far_more_fuel_mass() {
    let dir = tempfile::tempdir().expect("tempdir");

    let hydrogen = DesignProblem::new(DesignConfig::default(), dir.path())
        .expect("hydrogen setup")
        .solve()
        .expect("hydrogen solve");

    let mut config = DesignConfig::default();
    config.fuel = FuelType::JetA;
    let kerosene = DesignProblem::new(config, dir.path())
        .expect("kerosene setup")
        .solve()
        .expect("kerosene solve");

    assert!(hydrogen.feasible, "status {}", hydrogen.status);
    assert!(kerosene.feasible, "status {}", kerosene.status);

    // Jet A carries less than half the specific energy of hydrogen, so the
    // same mission takes well over twice the fuel mass.
    let h2_fuel = hydrogen.point.fuel_mass_kg();
    let jeta_fuel = kerosene.point.fuel_mass_kg();
    assert!(
        jeta_fuel > 1.5 * h2_fuel,
        "Jet A fuel {jeta_fuel:.0} kg vs hydrogen {h2_fuel:.0} kg"
    );

    for solution in [&hydrogen, &kerosene] {
        let te = solution.point.transport_energy_mj_per_pax_km();
        assert!((0.4..2.0).contains(&te), "transport energy {te:.3}");
        assert!(solution.point.n_pax == N_PAX);
    }
}

#[test]
fn off_design_coverage_brackets_the_design_range() {
    let samples = 25;
    let dir = tempfile::tempdir().expect("tempdir");
    let solution = DesignProblem::new(DesignConfig::default(), dir.path())
        .expect("problem setup")
        .solve()
        .expect("solve");
    let point = &solution.point;

    let curve = off_design_coverage(point, samples);
    assert_eq!(curve.len(), 2 * samples);

    for pair in curve.windows(2) {
        assert!(
            pair[1].range_m >= pair[0].range_m - 1.0,
            "coverage ranges should not decrease: {} then {}",
            pair[0].range_m,
            pair[1].range_m
        );
    }
    for sample in &curve {
        assert!(sample.range_m > 0.0);
        assert!(sample.transport_energy_mj_per_pax_km.is_finite());
        assert!(sample.transport_energy_mj_per_pax_km > 0.0);
    }

    // The fuel-offload branch ends at the design point; the pax-offload
    // branch continues past it.
    let junction = &curve[samples - 1];
    let design_range = point.flight_range_m;
    let design_te = point.transport_energy_mj_per_pax_km();
    assert!(
        (junction.range_m - design_range).abs() / design_range < 1.0e-6,
        "junction range {} vs design {}",
        junction.range_m,
        design_range
    );
    assert!(
        (junction.transport_energy_mj_per_pax_km - design_te).abs() / design_te < 1.0e-6
    );
    assert!(curve[0].range_m < 0.1 * design_range);
    assert!(curve[2 * samples - 1].range_m > design_range);

    // Nearly empty of passengers, the last point burns fuel on almost
    // nobody's behalf.
    assert!(
        curve[2 * samples - 1].transport_energy_mj_per_pax_km > 5.0 * design_te,
        "last coverage point should be far less efficient than the design"
    );
}

#[test]
fn tank_fraction_sweep_prices_heavier_tanks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = DesignConfig::default();
    let solutions = solve_tank_fraction_sweep(&config, &[1.0, 0.85], dir.path())
        .expect("tank fraction sweep");
    assert_eq!(solutions.len(), 2);

    let massless = &solutions[0];
    let heavy = &solutions[1];
    assert!(massless.feasible, "status {}", massless.status);
    assert!(heavy.feasible, "status {}", heavy.status);

    // A heavier tank raises empty mass, which ripples into more fuel for the
    // same mission and a worse transport energy.
    assert!(
        heavy.point.transport_energy_mj_per_pax_km()
            > massless.point.transport_energy_mj_per_pax_km(),
        "tank at 85% fuel fraction should cost energy over a massless tank"
    );
    assert!(heavy.point.fuel_mass_kg() > massless.point.fuel_mass_kg());
}

#[test]
fn range_family_grows_with_mission() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = DesignConfig::default();
    let ranges_nmi = [3750.0, 7500.0];
    let solutions =
        solve_range_family(&config, &ranges_nmi, dir.path()).expect("range family");
    assert_eq!(solutions.len(), 2);

    for (solution, range_nmi) in solutions.iter().zip(ranges_nmi) {
        assert!(
            solution.feasible,
            "range {range_nmi} nmi: status {} violation {:.3e}",
            solution.status, solution.max_constraint_violation
        );
        assert!(
            solution.point.flight_range_nmi() >= 0.985 * range_nmi,
            "range {range_nmi} nmi: flight range {:.0} nmi",
            solution.point.flight_range_nmi()
        );
    }

    let short = &solutions[0].point;
    let long = &solutions[1].point;
    assert!(long.values.design_togw_kg > short.values.design_togw_kg);
    assert!(long.fuel_mass_kg() > short.fuel_mass_kg());
}
