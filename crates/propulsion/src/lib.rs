//! Propulsion and fuel-system models: turbofan scaling from a reference
//! engine, thrust sizing, and fuselage fuel-tank volumetrics.

pub mod lines;
pub mod supply;

use lh2_core::constants::{G, KEROSENE_SPECIFIC_ENERGY_J_KG};
use lh2_core::units::{in_to_m, lbf_to_n, lbm_to_kg};

/// A reference engine whose attributes are scaled to the design thrust.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceEngine {
    pub thrust_n: f64,
    pub fan_diameter_m: f64,
    pub outer_diameter_m: f64,
    pub mass_kg: f64,
    /// Thrust-specific fuel consumption (lb fuel / lbf / hour).
    pub tsfc_lb_lbf_hr: f64,
}

impl ReferenceEngine {
    /// The GE9X, the largest in-service high-bypass turbofan.
    pub fn ge9x() -> Self {
        Self {
            thrust_n: lbf_to_n(110_000.0),
            fan_diameter_m: in_to_m(134.0),
            outer_diameter_m: in_to_m(163.7),
            mass_kg: lbm_to_kg(21_230.0),
            tsfc_lb_lbf_hr: 0.490,
        }
    }

    /// Effective specific impulse on the reference (kerosene) fuel (s).
    pub fn isp_s(&self) -> f64 {
        3_600.0 / self.tsfc_lb_lbf_hr
    }

    /// Specific impulse when burning a fuel of the given specific energy,
    /// scaled by energy content relative to kerosene (s).
    pub fn isp_for_fuel_s(&self, fuel_specific_energy_j_kg: f64) -> f64 {
        self.isp_s() * (fuel_specific_energy_j_kg / KEROSENE_SPECIFIC_ENERGY_J_KG)
    }
}

/// Design thrust requirements from cruise drag and the climb-gradient case.
#[derive(Debug, Clone, Copy)]
pub struct ThrustSizing {
    pub cruise_total_n: f64,
    pub climb_total_n: f64,
    pub climb_per_engine_n: f64,
}

/// Size the installed thrust: cruise drag at an assumed lift-to-drag ratio,
/// plus the excess power needed to hold the design climb rate at the design
/// climb speed.
pub fn size_thrust(
    design_togw_kg: f64,
    n_engines: f64,
    ld_estimate: f64,
    climb_rate_m_s: f64,
    v_climb_m_s: f64,
) -> ThrustSizing {
    let cruise_total_n = design_togw_kg * G / ld_estimate;
    let climb_total_n = cruise_total_n + design_togw_kg * G * climb_rate_m_s / v_climb_m_s;
    ThrustSizing {
        cruise_total_n,
        climb_total_n,
        climb_per_engine_n: climb_total_n / n_engines,
    }
}

/// An engine scaled from a reference by its required thrust.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    pub thrust_n: f64,
    pub fan_diameter_m: f64,
    pub outer_diameter_m: f64,
    pub mass_kg: f64,
    /// Thrust ratio to the reference engine.
    pub scale_ratio: f64,
}

impl Engine {
    /// Scale the reference engine to the required thrust: diameters grow with
    /// the square root of the thrust ratio, mass with the 1.1 power.
    pub fn scaled_from(reference: &ReferenceEngine, required_thrust_n: f64) -> Self {
        let ratio = required_thrust_n / reference.thrust_n;
        Self {
            thrust_n: required_thrust_n,
            fan_diameter_m: reference.fan_diameter_m * ratio.powf(0.5),
            outer_diameter_m: reference.outer_diameter_m * ratio.powf(0.5),
            mass_kg: reference.mass_kg * ratio.powf(1.1),
            scale_ratio: ratio,
        }
    }
}

/// A cylindrical fuselage fuel tank with a constant wall thickness.
#[derive(Debug, Clone, Copy)]
pub struct FuelTank {
    pub exterior_radius_m: f64,
    pub length_m: f64,
    pub wall_thickness_m: f64,
}

impl FuelTank {
    /// Fuselage cross-section area occupied by the tank (m²).
    pub fn exterior_volume_m3(&self) -> f64 {
        std::f64::consts::PI * self.exterior_radius_m.powi(2) * self.length_m
    }

    /// Pressure-vessel interior radius after the wall allowance (m).
    pub fn interior_radius_m(&self) -> f64 {
        self.exterior_radius_m - self.wall_thickness_m
    }

    /// Usable interior volume: wall thickness comes off the radius and off
    /// both ends (m³).
    pub fn interior_volume_m3(&self) -> f64 {
        std::f64::consts::PI
            * self.interior_radius_m().powi(2)
            * (self.length_m - 2.0 * self.wall_thickness_m)
    }

    /// Fuel mass at complete fill (kg).
    pub fn fuel_mass_kg(&self, fuel_density_kg_m3: f64) -> f64 {
        fuel_density_kg_m3 * self.interior_volume_m3()
    }
}
