use std::fs;

use lh2_config::{ConfigError, DesignConfig, FuelType, Objective, load_design};

#[test]
fn bundled_hydrogen_config_loads_from_toml() {
    let config = load_design("configs/hydrogen_400pax.toml").expect("hydrogen toml");
    assert_eq!(config.fuel, FuelType::Hydrogen);
    assert_eq!(config.n_pax, 400.0);
    assert_eq!(config.mission_range_nmi, 7_500.0);
    assert_eq!(config.objective, Objective::FwdTankLength);
    assert_eq!(config.solver.max_evaluations, 4_000);
    assert!(config.tank_fuel_mass_fraction.is_none());
}

#[test]
fn bundled_kerosene_config_loads_from_yaml() {
    let config = load_design("configs/kerosene_400pax.yaml").expect("kerosene yaml");
    assert_eq!(config.fuel, FuelType::JetA);
    assert_eq!(config.n_pax, 400.0);
    assert!((config.solver.constraint_tolerance - 1e-3).abs() < 1e-12);
}

#[test]
fn defaults_describe_the_baseline_hydrogen_mission() {
    let config = DesignConfig::default();
    assert_eq!(config.fuel, FuelType::Hydrogen);
    assert_eq!(config.n_pax, 400.0);
    assert_eq!(config.mission_range_nmi, 7_500.0);
    assert!((config.mission_range_m() - 7_500.0 * 1_852.0).abs() < 1e-6);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.toml");
    fs::write(&path, "fuel = \"jet_a\"\n").expect("write toml");

    let config = load_design(&path).expect("partial toml");
    assert_eq!(config.fuel, FuelType::JetA);
    assert_eq!(config.n_pax, 400.0);
    assert_eq!(config.mission_range_nmi, 7_500.0);
    assert!((config.solver.f_tol_rel - 1e-8).abs() < 1e-20);
}

#[test]
fn yaml_with_overrides_parses_and_validates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("study.yaml");
    fs::write(
        &path,
        "fuel: lh2\nn_pax: 250\nmission_range_nmi: 3750\ntank_fuel_mass_fraction: 0.5\nobjective: togw\n",
    )
    .expect("write yaml");

    let config = load_design(&path).expect("yaml overrides");
    assert_eq!(config.fuel, FuelType::Hydrogen);
    assert_eq!(config.n_pax, 250.0);
    assert_eq!(config.objective, Objective::Togw);
    assert_eq!(config.tank_fuel_mass_fraction, Some(0.5));
    assert!((config.fuel_properties().tank_fuel_mass_fraction - 0.5).abs() < 1e-12);
}

#[test]
fn fuel_names_accept_the_common_aliases() {
    assert_eq!("hydrogen".parse::<FuelType>().unwrap(), FuelType::Hydrogen);
    assert_eq!("LH2".parse::<FuelType>().unwrap(), FuelType::Hydrogen);
    assert_eq!("kerosene".parse::<FuelType>().unwrap(), FuelType::JetA);
    assert_eq!("Jet A".parse::<FuelType>().unwrap(), FuelType::JetA);
    assert_eq!(" jet_a ".parse::<FuelType>().unwrap(), FuelType::JetA);
    assert!(matches!(
        "diesel".parse::<FuelType>(),
        Err(ConfigError::UnknownFuel(_))
    ));
}

#[test]
fn fuel_properties_reflect_the_stored_fuel() {
    let hydrogen = FuelType::Hydrogen.properties();
    assert_eq!(hydrogen.density_kg_m3, 70.0);
    assert!((hydrogen.tank_fuel_mass_fraction - 1.0 / 1.356).abs() < 1e-9);
    assert!(hydrogen.specific_energy_j_kg > 100.0e6);

    let kerosene = FuelType::JetA.properties();
    assert_eq!(kerosene.density_kg_m3, 820.0);
    assert_eq!(kerosene.tank_fuel_mass_fraction, 0.95);
    // Hydrogen carries ~2.8x the energy per kilogram.
    assert!(hydrogen.specific_energy_j_kg / kerosene.specific_energy_j_kg > 2.5);
}

#[test]
fn validation_rejects_unusable_configurations() {
    let mut config = DesignConfig::default();
    assert!(config.validate().is_ok());

    config.n_pax = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config = DesignConfig::default();
    config.mission_range_nmi = -100.0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config = DesignConfig::default();
    config.tank_fuel_mass_fraction = Some(0.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    config.tank_fuel_mass_fraction = Some(1.2);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    // The all-fuel limit itself is allowed.
    config.tank_fuel_mass_fraction = Some(1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn loading_a_missing_file_reports_io_error() {
    let err = load_design("configs/does_not_exist.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
