//! Empirical subsystem mass regressions: Raymer transport-category equations
//! with TASOPT-style payload-proportional factors. Each returns a
//! [`MassProperties`] positioned at the subsystem's structural reference point.
//!
//! Regression coefficients expect English units internally; all interfaces
//! here are SI.

use lh2_core::units::{FOOT, INCH, POUND_MASS, kg_to_lbm, lbm_to_kg, m_to_ft};

use crate::properties::MassProperties;

/// Mass per passenger including carry-on baggage (kg).
pub const MASS_PER_PAX_KG: f64 = 215.0 * POUND_MASS;

/// Cabin-distributed item: uniform along the cabin, centered at its midpoint.
fn cabin_item(
    mass_kg: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
    cabin_length_m: f64,
) -> MassProperties {
    MassProperties::from_radius_of_gyration(
        mass_kg,
        x_cabin_midpoint_m,
        0.5 * cabin_radius_m,
        cabin_length_m / 12f64.sqrt(),
        cabin_length_m / 12f64.sqrt(),
    )
}

/// Passengers at 215 lbm each, distributed along the cabin.
pub fn passengers(
    n_pax: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
    cabin_length_m: f64,
) -> MassProperties {
    cabin_item(
        MASS_PER_PAX_KG * n_pax,
        x_cabin_midpoint_m,
        cabin_radius_m,
        cabin_length_m,
    )
}

/// Seats at 10% of passenger mass, from TASOPT.
pub fn seats(
    passenger_mass_kg: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
    cabin_length_m: f64,
) -> MassProperties {
    cabin_item(
        0.10 * passenger_mass_kg,
        x_cabin_midpoint_m,
        cabin_radius_m,
        cabin_length_m,
    )
}

/// Auxiliary power unit at 3.5% of passenger mass, from TASOPT.
pub fn apu(
    passenger_mass_kg: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
    cabin_length_m: f64,
) -> MassProperties {
    cabin_item(
        0.035 * passenger_mass_kg,
        x_cabin_midpoint_m,
        cabin_radius_m,
        cabin_length_m,
    )
}

/// Payload-proportional equipment (attendants, food, galleys, lavatories,
/// luggage hold, doors, lighting, air conditioning, entertainment) at 35% of
/// passenger mass, from TASOPT.
pub fn payload_proportional(
    passenger_mass_kg: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
    cabin_length_m: f64,
) -> MassProperties {
    cabin_item(
        0.35 * passenger_mass_kg,
        x_cabin_midpoint_m,
        cabin_radius_m,
        cabin_length_m,
    )
}

/// Apparent mass of the pressurized-cabin air relative to cruise ambient.
pub fn buoyancy(
    cabin_air_density_kg_m3: f64,
    cruise_air_density_kg_m3: f64,
    cabin_xsec_area_m2: f64,
    cabin_length_m: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
) -> MassProperties {
    cabin_item(
        (cabin_air_density_kg_m3 - cruise_air_density_kg_m3) * cabin_xsec_area_m2 * cabin_length_m,
        x_cabin_midpoint_m,
        cabin_radius_m,
        cabin_length_m,
    )
}

/// Raymer transport-wing structural mass.
#[allow(clippy::too_many_arguments)]
pub fn wing(
    design_togw_kg: f64,
    ultimate_load_factor: f64,
    area_m2: f64,
    aspect_ratio: f64,
    airfoil_thickness: f64,
    taper_ratio: f64,
    mean_sweep_deg: f64,
    x_aerodynamic_center_m: f64,
    span_m: f64,
    root_chord_m: f64,
) -> MassProperties {
    let area_ft2 = area_m2 / FOOT.powi(2);
    let mass_lbm = 0.0051
        * (kg_to_lbm(design_togw_kg) * ultimate_load_factor).powf(0.557)
        * area_ft2.powf(0.649)
        * aspect_ratio.powf(0.5)
        * airfoil_thickness.powf(-0.4)
        * (1.0 + taper_ratio).powf(0.1)
        * mean_sweep_deg.to_radians().cos().powf(-1.0)
        * (area_ft2 * 0.1).powf(0.1); // control-surface area taken as 10% of planform
    MassProperties::from_radius_of_gyration(
        lbm_to_kg(mass_lbm),
        x_aerodynamic_center_m,
        span_m / 12f64.sqrt(),
        root_chord_m / 12f64.sqrt(),
        span_m / 12f64.sqrt(),
    )
}

/// Raymer horizontal-tail structural mass.
#[allow(clippy::too_many_arguments)]
pub fn hstab(
    design_togw_kg: f64,
    ultimate_load_factor: f64,
    fuselage_diameter_m: f64,
    span_m: f64,
    area_m2: f64,
    wing_to_hstab_distance_m: f64,
    mean_sweep_deg: f64,
    aspect_ratio: f64,
    x_aerodynamic_center_m: f64,
) -> MassProperties {
    let tail_arm_ft = m_to_ft(wing_to_hstab_distance_m);
    let mass_lbm = 0.0379
        * 1.0 // fixed (non-all-moving) stabilizer mount
        * (1.0 + fuselage_diameter_m / span_m).powf(-0.25)
        * kg_to_lbm(design_togw_kg).powf(0.639)
        * ultimate_load_factor.powf(0.10)
        * (area_m2 / FOOT.powi(2)).powf(0.75)
        * tail_arm_ft.powf(-1.0)
        * (0.3 * tail_arm_ft).powf(0.704)
        * mean_sweep_deg.to_radians().cos().powf(-1.0)
        * aspect_ratio.powf(0.166)
        * (1.0 + 0.1_f64).powf(0.1); // elevator area fraction
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_aerodynamic_center_m)
}

/// Raymer vertical-tail structural mass.
#[allow(clippy::too_many_arguments)]
pub fn vstab(
    design_togw_kg: f64,
    ultimate_load_factor: f64,
    area_m2: f64,
    wing_to_vstab_distance_m: f64,
    mean_sweep_deg: f64,
    aspect_ratio: f64,
    airfoil_thickness: f64,
    x_aerodynamic_center_m: f64,
) -> MassProperties {
    let mass_lbm = 0.0026
        * (1.0 + 0.0_f64).powf(0.225) // fuselage-mounted (not T-tail)
        * kg_to_lbm(design_togw_kg).powf(0.556)
        * ultimate_load_factor.powf(0.536)
        * wing_to_vstab_distance_m.powf(-0.5)
        * (area_m2 / FOOT.powi(2)).powf(0.5)
        * m_to_ft(wing_to_vstab_distance_m).powf(0.875)
        * mean_sweep_deg.to_radians().cos().powf(-1.0)
        * aspect_ratio.powf(0.35)
        * airfoil_thickness.powf(-0.5);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_aerodynamic_center_m)
}

/// Raymer wing-geometry correction constant for the fuselage equation.
pub fn fuselage_k_ws(
    wing_taper_ratio: f64,
    wing_span_m: f64,
    wing_mean_sweep_deg: f64,
    fuselage_structural_length_m: f64,
) -> f64 {
    0.75 * ((1.0 + 2.0 * wing_taper_ratio) / (1.0 + wing_taper_ratio))
        * (wing_span_m / fuselage_structural_length_m * wing_mean_sweep_deg.to_radians().tan())
}

/// Raymer fuselage structural mass, with a 25% adder for the cargo doors and
/// aft clamshell.
#[allow(clippy::too_many_arguments)]
pub fn fuselage(
    design_togw_kg: f64,
    ultimate_load_factor: f64,
    structural_length_m: f64,
    wetted_area_m2: f64,
    k_ws: f64,
    x_cabin_midpoint_m: f64,
    cabin_radius_m: f64,
    cabin_length_m: f64,
) -> MassProperties {
    let mass_lbm = 0.3280
        * 1.25 // 2 cargo doors + 1 aft clamshell door
        * 1.0 // wing-yehudi-mounted main gear
        * (kg_to_lbm(design_togw_kg) * ultimate_load_factor).powf(0.5)
        * m_to_ft(structural_length_m).powf(0.25)
        * (wetted_area_m2 / FOOT.powi(2)).powf(0.302)
        * (1.0 + k_ws).powf(0.04)
        * 16f64.powf(0.10); // L/D
    cabin_item(
        lbm_to_kg(mass_lbm),
        x_cabin_midpoint_m,
        cabin_radius_m,
        cabin_length_m,
    )
}

/// Raymer main landing gear: 6 wheels, 2 shock struts, 51 kn stall speed.
pub fn main_landing_gear(
    design_togw_kg: f64,
    ultimate_load_factor: f64,
    gear_length_m: f64,
    x_cg_m: f64,
) -> MassProperties {
    let mass_lbm = 0.0106
        * 1.0 // non-kneeling gear
        * kg_to_lbm(design_togw_kg).powf(0.888)
        * ultimate_load_factor.powf(0.25)
        * (gear_length_m / INCH).powf(0.4)
        * 6f64.powf(0.321)
        * 2f64.powf(-0.5)
        * 51f64.powf(0.1);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer nose landing gear: 2 wheels.
pub fn nose_landing_gear(
    design_togw_kg: f64,
    ultimate_load_factor: f64,
    gear_length_m: f64,
    x_cg_m: f64,
) -> MassProperties {
    let mass_lbm = 0.032
        * 1.0 // non-reciprocating engine
        * kg_to_lbm(design_togw_kg).powf(0.646)
        * ultimate_load_factor.powf(0.2)
        * (gear_length_m / INCH).powf(0.5)
        * 2f64.powf(0.45);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer pylon-mounted nacelle group, sized from the dressed engine mass.
pub fn nacelles(
    n_engines: f64,
    engine_set_mass_kg: f64,
    nacelle_height_m: f64,
    nacelle_width_m: f64,
    nacelle_length_m: f64,
    ultimate_load_factor: f64,
) -> MassProperties {
    let engine_and_contents_lbm = 2.331
        * (kg_to_lbm(engine_set_mass_kg) / n_engines).powf(0.901)
        * 1.0 // no propeller
        * 1.18; // thrust reverser
    let wetted_area_m2 = nacelle_height_m * nacelle_length_m * 2.05;
    let mass_kg = 0.6724
        * 1.017 // pylon-mounted nacelle
        * m_to_ft(nacelle_height_m).powf(0.10)
        * m_to_ft(nacelle_width_m).powf(0.294)
        * ultimate_load_factor.powf(0.119)
        * engine_and_contents_lbm.powf(0.611)
        * n_engines.powf(0.984)
        * (wetted_area_m2 / FOOT.powi(2)).powf(0.224);
    MassProperties::point_mass(mass_kg, 0.0)
}

/// Raymer engine controls, run length taken to the cabin midpoint.
pub fn engine_controls(n_engines: f64, x_cabin_midpoint_m: f64, x_cg_m: f64) -> MassProperties {
    let mass_lbm = 5.0 * n_engines + 0.80 * m_to_ft(x_cabin_midpoint_m) * n_engines;
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer pneumatic starter.
pub fn starter(engine_set_mass_kg: f64, x_cg_m: f64) -> MassProperties {
    let mass_lbm = 49.19 * (kg_to_lbm(engine_set_mass_kg) / 1000.0).powf(0.541);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer flight controls, sized by control-surface area and aircraft pitching
/// inertia.
pub fn flight_controls(
    control_surface_area_m2: f64,
    sizing_iyy_kg_m2: f64,
    x_cg_m: f64,
) -> MassProperties {
    let iyy_lbm_ft2 = sizing_iyy_kg_m2 / (POUND_MASS * FOOT.powi(2));
    let mass_lbm = 145.9
        * 6f64.powf(0.554) // number of functions performed by controls
        * (1.0 + 1.0_f64 / 6.0).powf(-1.0)
        * (control_surface_area_m2 / FOOT.powi(2)).powf(0.20)
        * (iyy_lbm_ft2 * 1e-6).powf(0.07);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer instruments for a two-crew flight deck.
pub fn instruments(
    n_engines: f64,
    cabin_length_m: f64,
    wing_span_m: f64,
    x_cg_m: f64,
) -> MassProperties {
    let mass_lbm = 4.509
        * 1.0 // non-reciprocating
        * 1.0 // not turboprop
        * 2f64.powf(0.541) // crew
        * n_engines
        * (m_to_ft(cabin_length_m) * m_to_ft(wing_span_m)).powf(0.5);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer hydraulics, sized by system run length.
pub fn hydraulics(cabin_length_m: f64, wing_span_m: f64, x_cg_m: f64) -> MassProperties {
    let mass_lbm = 0.2673 * 6.0 * (m_to_ft(cabin_length_m) * m_to_ft(wing_span_m)).powf(0.937);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer electrical system.
pub fn electrical(cabin_length_m: f64, n_engines: f64, x_cg_m: f64) -> MassProperties {
    let mass_lbm = 7.291
        * 48f64.powf(0.782) // system voltage
        * m_to_ft(cabin_length_m).powf(0.346)
        * n_engines.powf(0.10);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Raymer avionics at a 1100 lbm uninstalled suite mass.
pub fn avionics(x_cg_m: f64) -> MassProperties {
    let mass_lbm = 1.73 * 1100f64.powf(0.983);
    MassProperties::point_mass(lbm_to_kg(mass_lbm), x_cg_m)
}

/// Anti-ice allocation at 0.2% of design TOGW.
pub fn anti_ice(design_togw_kg: f64, x_cg_m: f64) -> MassProperties {
    MassProperties::point_mass(0.002 * design_togw_kg, x_cg_m)
}

/// Ground-handling gear allocation at 0.03% of design TOGW.
pub fn handling_gear(design_togw_kg: f64, x_cg_m: f64) -> MassProperties {
    MassProperties::point_mass(3e-4 * design_togw_kg, x_cg_m)
}
