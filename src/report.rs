//! Plain-text report for a solved design point.
//!
//! Layout follows the study's working notes: star-bar section banners, keys
//! right-aligned to 25 columns, values in 6-significant-digit general format.

use std::fmt::Write as _;

use lh2_config::{DesignConfig, Objective};
use lh2_core::units;
use lh2_design::DesignSolution;
use lh2_export::summary;
use lh2_mass::Subsystem;

/// A section banner: the upper-cased title between two star bars.
pub fn banner(title: &str) -> String {
    let bar = "*".repeat(20);
    format!("{bar}{}{bar}", title.to_uppercase())
}

/// Formats a value with six significant digits, switching to scientific
/// notation outside `[1e-4, 1e6)` and trimming trailing zeros.
pub fn format_g6(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // Rounding at 6 digits can push the mantissa to 10.0.
    if format!("{:.5}", mantissa.abs()).starts_with("10") {
        mantissa /= 10.0;
        exponent += 1;
    }
    if exponent < -4 || exponent >= 6 {
        let mut digits = format!("{mantissa:.5}");
        trim_trailing_zeros(&mut digits);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{digits}e{sign}{:02}", exponent.abs())
    } else {
        let decimals = (5 - exponent).max(0) as usize;
        let mut digits = format!("{value:.decimals$}");
        trim_trailing_zeros(&mut digits);
        digits
    }
}

fn trim_trailing_zeros(digits: &mut String) {
    if digits.contains('.') {
        while digits.ends_with('0') {
            digits.pop();
        }
        if digits.ends_with('.') {
            digits.pop();
        }
    }
}

/// Renders the full design report: outputs, key design variables, and the
/// per-subsystem mass table.
pub fn design_report(solution: &DesignSolution) -> String {
    let point = &solution.point;
    let mut out = String::new();

    let _ = writeln!(out, "{}", banner("Outputs"));
    for (key, value) in [
        ("flight_range_nmi", point.flight_range_nmi()),
        ("mass_fuel_per_pax_mi", point.fuel_per_pax_nmi_kg()),
        ("L/D", point.lift_to_drag()),
    ] {
        let _ = writeln!(out, "{key:>25} = {}", format_g6(value));
    }

    let _ = writeln!(out, "{}", banner("Key design variables"));
    for (key, value) in [
        ("fwd_fuel_tank_length", point.values.fwd_tank_length_m),
        ("fuselage_cabin_diameter", point.values.cabin_diameter_m),
        ("mass_TOGW", point.computed_togw_kg()),
        ("mass_empty", point.empty_mass_kg()),
        ("mach_cruise", point.values.mach),
        ("altitude_cruise", point.values.altitude_m),
        ("alpha", point.values.alpha_deg),
    ] {
        let _ = writeln!(out, "{key:>25} = {}", format_g6(value));
    }

    let _ = writeln!(out, "{}", banner("Mass props"));
    for subsystem in Subsystem::ALL {
        let _ = writeln!(
            out,
            "{:>25} = {:.0} kg",
            subsystem.key(),
            point.breakdown.get(subsystem).mass_kg
        );
    }

    out
}

/// Builds the summary CSV row for a solved design. Mission range and tank
/// fraction come from the solved point, so per-problem overrides applied by
/// the family solvers are reflected as-is.
pub fn summary_record<'a>(
    config: &'a DesignConfig,
    solution: &'a DesignSolution,
) -> summary::Record<'a> {
    let point = &solution.point;
    summary::Record {
        fuel: config.fuel.label(),
        n_pax: point.n_pax,
        mission_range_nmi: units::m_to_nmi(point.mission_range_m),
        tank_fuel_mass_fraction: point.fuel.tank_fuel_mass_fraction,
        objective: objective_key(config.objective),
        status: &solution.status,
        feasible: solution.feasible,
        max_constraint_violation: solution.max_constraint_violation,
        fwd_tank_length_m: point.values.fwd_tank_length_m,
        design_togw_kg: point.values.design_togw_kg,
        computed_togw_kg: point.computed_togw_kg(),
        empty_mass_kg: point.empty_mass_kg(),
        fuel_mass_kg: point.fuel_mass_kg(),
        mach: point.values.mach,
        altitude_m: point.values.altitude_m,
        alpha_deg: point.values.alpha_deg,
        lift_to_drag: point.lift_to_drag(),
        flight_range_nmi: point.flight_range_nmi(),
        transport_energy_mj_per_pax_km: point.transport_energy_mj_per_pax_km(),
    }
}

fn objective_key(objective: Objective) -> &'static str {
    match objective {
        Objective::FwdTankLength => "fwd_tank_length",
        Objective::Togw => "togw",
    }
}

/// One-line solver verdict for the binaries' logs.
pub fn solve_verdict(solution: &DesignSolution) -> String {
    if solution.feasible {
        format!("solver converged ({})", solution.status)
    } else {
        format!(
            "solver did not converge ({}, worst constraint violation {:.3e}); reporting the final iterate",
            solution.status, solution.max_constraint_violation
        )
    }
}
