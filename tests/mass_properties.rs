use lh2_mass::{MassBreakdown, MassProperties, Subsystem};

#[test]
fn point_mass_has_no_inertia_about_its_own_cg() {
    let props = MassProperties::point_mass(120.0, 5.0);
    assert_eq!(props.mass_kg, 120.0);
    assert_eq!(props.x_cg_m, 5.0);
    assert_eq!(props.y_cg_m, 0.0);
    assert_eq!(props.ixx_kg_m2, 0.0);
    assert_eq!(props.iyy_kg_m2, 0.0);
    assert_eq!(props.izz_kg_m2, 0.0);
    assert_eq!(props.first_moment_kg_m(), [600.0, 0.0, 0.0]);
}

#[test]
fn radius_of_gyration_sets_principal_inertias() {
    let props = MassProperties::from_radius_of_gyration(10.0, 1.0, 1.0, 2.0, 3.0);
    assert_eq!(props.mass_kg, 10.0);
    assert_eq!(props.x_cg_m, 1.0);
    assert!((props.ixx_kg_m2 - 10.0).abs() < 1e-12);
    assert!((props.iyy_kg_m2 - 40.0).abs() < 1e-12);
    assert!((props.izz_kg_m2 - 90.0).abs() < 1e-12);
}

#[test]
fn addition_superposes_mass_and_applies_parallel_axis() {
    let a = MassProperties::point_mass(2.0, 0.0);
    let b = MassProperties::point_mass(6.0, 4.0);
    let combined = a + b;

    assert!((combined.mass_kg - 8.0).abs() < 1e-12);
    assert!((combined.x_cg_m - 3.0).abs() < 1e-12);
    // Point masses at 3 m and 1 m from the combined cg.
    assert!((combined.iyy_kg_m2 - 24.0).abs() < 1e-12);
    assert!((combined.izz_kg_m2 - 24.0).abs() < 1e-12);
    // Offsets are purely in x, which does not enter ixx.
    assert!(combined.ixx_kg_m2.abs() < 1e-12);
}

#[test]
fn addition_transports_own_inertia_to_the_combined_cg() {
    let a = MassProperties::from_radius_of_gyration(4.0, 0.0, 1.0, 1.0, 1.0);
    let b = MassProperties::from_radius_of_gyration(4.0, 2.0, 1.0, 1.0, 1.0);
    let combined = a + b;

    assert!((combined.x_cg_m - 1.0).abs() < 1e-12);
    // Each element: own 4 kg m^2 plus 4 kg over a 1 m arm.
    assert!((combined.iyy_kg_m2 - 16.0).abs() < 1e-12);
    assert!((combined.ixx_kg_m2 - 8.0).abs() < 1e-12);
}

#[test]
fn subtraction_recovers_a_removed_element() {
    let a = MassProperties::from_radius_of_gyration(4.0, 0.0, 1.0, 1.0, 1.0);
    let b = MassProperties::from_radius_of_gyration(4.0, 2.0, 1.0, 1.0, 1.0);
    let recovered = (a + b) - b;

    assert!((recovered.mass_kg - a.mass_kg).abs() < 1e-9);
    assert!((recovered.x_cg_m - a.x_cg_m).abs() < 1e-9);
    assert!((recovered.ixx_kg_m2 - a.ixx_kg_m2).abs() < 1e-9);
    assert!((recovered.iyy_kg_m2 - a.iyy_kg_m2).abs() < 1e-9);
}

#[test]
fn scaling_leaves_the_cg_in_place() {
    let props = MassProperties::from_radius_of_gyration(10.0, 3.0, 1.0, 1.0, 1.0) * 0.5;
    assert!((props.mass_kg - 5.0).abs() < 1e-12);
    assert!((props.x_cg_m - 3.0).abs() < 1e-12);
    assert!((props.ixx_kg_m2 - 5.0).abs() < 1e-12);

    let divided = props / 0.5;
    assert!((divided.mass_kg - 10.0).abs() < 1e-12);
}

#[test]
fn sum_folds_from_the_zero_identity() {
    let total: MassProperties = [
        MassProperties::point_mass(1.0, 0.0),
        MassProperties::point_mass(1.0, 2.0),
        MassProperties::point_mass(2.0, 4.0),
    ]
    .into_iter()
    .sum();
    assert!((total.mass_kg - 4.0).abs() < 1e-12);
    assert!((total.x_cg_m - 2.5).abs() < 1e-12);

    let zero = MassProperties::ZERO + MassProperties::point_mass(7.0, 1.0);
    assert!((zero.mass_kg - 7.0).abs() < 1e-12);
    assert!((zero.x_cg_m - 1.0).abs() < 1e-12);
}

#[test]
fn breakdown_aggregates_exclude_payload_and_consumables() {
    let breakdown = numbered_breakdown();

    // Masses 1..=24 sum to 300.
    assert!((breakdown.togw().mass_kg - 300.0).abs() < 1e-9);
    // Empty excludes passengers (1) and fuel (23).
    assert!((breakdown.empty().mass_kg - 276.0).abs() < 1e-9);
    assert!((breakdown.with_pax().mass_kg - 277.0).abs() < 1e-9);
    assert!((breakdown.half_fuel().mass_kg - 288.5).abs() < 1e-9);
    // Less wing (6), hstab (7), vstab (8).
    assert!((breakdown.empty_less_lifting_surfaces().mass_kg - 255.0).abs() < 1e-9);
    // Co-located point masses keep the shared cg.
    assert!((breakdown.togw().x_cg_m - 2.0).abs() < 1e-9);
}

#[test]
fn subsystem_set_is_closed_and_keys_are_unique() {
    assert_eq!(Subsystem::ALL.len(), 24);
    let mut keys: Vec<&str> = Subsystem::ALL.iter().map(|s| s.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 24, "subsystem keys must be unique");

    assert!(keys.contains(&"payload_proportional_weights"));
    assert!(keys.contains(&"anti-ice"));
    assert!(keys.contains(&"main_landing_gear"));

    assert!(!Subsystem::Passengers.counts_toward_empty());
    assert!(!Subsystem::Fuel.counts_toward_empty());
    assert!(Subsystem::Tanks.counts_toward_empty());

    let breakdown = numbered_breakdown();
    assert!((breakdown.get(Subsystem::Wing).mass_kg - 6.0).abs() < 1e-12);
    assert!((breakdown.get(Subsystem::Tanks).mass_kg - 24.0).abs() < 1e-12);
    assert_eq!(breakdown.iter().count(), 24);
}

/// A breakdown whose subsystem masses are 1..=24 kg in declaration order,
/// all placed at x = 2 m.
fn numbered_breakdown() -> MassBreakdown {
    let entry = |mass: f64| MassProperties::point_mass(mass, 2.0);
    MassBreakdown {
        passengers: entry(1.0),
        seats: entry(2.0),
        apu: entry(3.0),
        payload_proportional: entry(4.0),
        buoyancy: entry(5.0),
        wing: entry(6.0),
        hstab: entry(7.0),
        vstab: entry(8.0),
        fuselage: entry(9.0),
        engines: entry(10.0),
        main_landing_gear: entry(11.0),
        nose_landing_gear: entry(12.0),
        nacelles: entry(13.0),
        engine_controls: entry(14.0),
        starter: entry(15.0),
        flight_controls: entry(16.0),
        instruments: entry(17.0),
        hydraulics: entry(18.0),
        electrical: entry(19.0),
        avionics: entry(20.0),
        anti_ice: entry(21.0),
        handling_gear: entry(22.0),
        fuel: entry(23.0),
        tanks: entry(24.0),
    }
}
