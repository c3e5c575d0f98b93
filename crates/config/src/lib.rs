//! Fuel properties and study configuration for the LH2 transport design studies.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use lh2_core::units;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Candidate fuels for the transport design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[serde(alias = "lh2")]
    Hydrogen,
    #[serde(alias = "kerosene", alias = "Jet A")]
    JetA,
}

impl FuelType {
    /// Bulk properties of the stored fuel and its tank system.
    pub fn properties(self) -> FuelProperties {
        match self {
            FuelType::Hydrogen => FuelProperties {
                // Saturated LH2 at ~1 atm; tank fraction from a 0.356 kg tank
                // per kg fuel cryo-tank allocation.
                tank_wall_thickness_m: 0.0612,
                density_kg_m3: 70.0,
                specific_energy_j_kg: 119.93e6,
                tank_fuel_mass_fraction: 1.0 / (1.0 + 0.356),
            },
            FuelType::JetA => FuelProperties {
                tank_wall_thickness_m: 0.005,
                density_kg_m3: 820.0,
                specific_energy_j_kg: 43.02e6,
                tank_fuel_mass_fraction: 0.95,
            },
        }
    }

    /// Human-readable fuel name for reports and plot labels.
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Hydrogen => "hydrogen",
            FuelType::JetA => "Jet A",
        }
    }
}

impl FromStr for FuelType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hydrogen" | "lh2" => Ok(FuelType::Hydrogen),
            "jet a" | "jet_a" | "jeta" | "kerosene" => Ok(FuelType::JetA),
            other => Err(ConfigError::UnknownFuel(other.to_string())),
        }
    }
}

/// Bulk fuel and tank-system properties used by the sizing model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProperties {
    /// Tank wall thickness subtracted from the pressure-vessel radius (m).
    pub tank_wall_thickness_m: f64,
    /// Stored fuel density (kg/m³).
    pub density_kg_m3: f64,
    /// Lower heating value of the fuel (J/kg).
    pub specific_energy_j_kg: f64,
    /// Fuel mass / (fuel + tank) mass of the fueled tank assembly.
    pub tank_fuel_mass_fraction: f64,
}

/// Objective minimized by the design solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Minimize the forward fuel-tank length (the hydrogen packing question).
    #[default]
    FwdTankLength,
    /// Minimize design take-off gross mass.
    Togw,
}

/// Stopping and tolerance settings handed to the optimization harness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum model evaluations before the solver gives up.
    #[serde(default = "default_max_evaluations")]
    pub max_evaluations: usize,
    /// Initial trust-region radius in scaled variable space.
    #[serde(default = "default_initial_step")]
    pub initial_step: f64,
    /// Relative objective tolerance for convergence.
    #[serde(default = "default_f_tol_rel")]
    pub f_tol_rel: f64,
    /// Tolerance below which a constraint violation still counts as feasible.
    #[serde(default = "default_constraint_tolerance")]
    pub constraint_tolerance: f64,
}

fn default_max_evaluations() -> usize {
    4_000
}

fn default_initial_step() -> f64 {
    0.5
}

fn default_f_tol_rel() -> f64 {
    1e-8
}

fn default_constraint_tolerance() -> f64 {
    1e-3
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_evaluations: default_max_evaluations(),
            initial_step: default_initial_step(),
            f_tol_rel: default_f_tol_rel(),
            constraint_tolerance: default_constraint_tolerance(),
        }
    }
}

/// Top-level study configuration. Defaults describe the baseline design
/// point: a 400-passenger hydrogen transport flying 7500 nmi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConfig {
    #[serde(default = "default_fuel")]
    pub fuel: FuelType,
    #[serde(default = "default_n_pax")]
    pub n_pax: f64,
    #[serde(default = "default_mission_range_nmi")]
    pub mission_range_nmi: f64,
    /// Overrides the fuel's built-in tank fuel-mass fraction; the knob the
    /// gravimetric-efficiency study turns.
    #[serde(default)]
    pub tank_fuel_mass_fraction: Option<f64>,
    #[serde(default)]
    pub objective: Objective,
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_fuel() -> FuelType {
    FuelType::Hydrogen
}

fn default_n_pax() -> f64 {
    400.0
}

fn default_mission_range_nmi() -> f64 {
    7_500.0
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            fuel: default_fuel(),
            n_pax: default_n_pax(),
            mission_range_nmi: default_mission_range_nmi(),
            tank_fuel_mass_fraction: None,
            objective: Objective::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl DesignConfig {
    /// Mission range requirement in metres.
    pub fn mission_range_m(&self) -> f64 {
        units::nmi_to_m(self.mission_range_nmi)
    }

    /// Fuel and tank-system properties, with the tank-fraction override
    /// applied when set.
    pub fn fuel_properties(&self) -> FuelProperties {
        let mut properties = self.fuel.properties();
        if let Some(fraction) = self.tank_fuel_mass_fraction {
            properties.tank_fuel_mass_fraction = fraction;
        }
        properties
    }

    /// Reject configurations the sizing model cannot represent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.n_pax > 0.0 && self.n_pax.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "passenger count must be positive, got {}",
                self.n_pax
            )));
        }
        if !(self.mission_range_nmi > 0.0 && self.mission_range_nmi.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "mission range must be positive, got {} nmi",
                self.mission_range_nmi
            )));
        }
        if let Some(fraction) = self.tank_fuel_mass_fraction {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "tank fuel-mass fraction must lie in (0, 1], got {fraction}"
                )));
            }
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown fuel type: {0:?} (expected \"hydrogen\" or \"jet_a\")")]
    UnknownFuel(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load a study configuration from a TOML or YAML file and validate it.
pub fn load_design<P: AsRef<Path>>(path: P) -> Result<DesignConfig, ConfigError> {
    let path = path.as_ref();
    let config: DesignConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}
