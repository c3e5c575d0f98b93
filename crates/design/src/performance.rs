//! Off-design performance of a converged design.

use lh2_core::spacing::linspace;

use crate::point::DesignPoint;

/// One off-design mission: the range flown and the energy intensity there.
#[derive(Debug, Clone, Copy)]
pub struct CoveragePoint {
    pub range_m: f64,
    pub transport_energy_mj_per_pax_km: f64,
}

/// Sweep a converged design across the missions it can actually fly.
///
/// Below the design range the airplane departs with partially-filled tanks
/// at full passenger load; beyond it, it trades passengers away and departs
/// with full tanks. Both branches hold the empty weight fixed, so the result
/// is a coverage curve for one fixed airframe. Points are ordered by
/// increasing range, the design mission in the middle.
pub fn off_design_coverage(point: &DesignPoint, samples: usize) -> Vec<CoveragePoint> {
    let empty_kg = point.empty_mass_kg();
    let pax_kg = point.breakdown.passengers.mass_kg;
    let fuel_kg = point.fuel_mass_kg();
    let specific_energy = point.fuel.specific_energy_j_kg;
    let n_pax = point.n_pax;
    let range_factor = point.op_point.true_airspeed_m_s() * point.lift_to_drag() * point.isp_s;

    let mut coverage = Vec::with_capacity(2 * samples);

    // Short missions: off-load fuel.
    for &fuel_fraction in &linspace(1e-3, 1.0, samples) {
        let takeoff_kg = empty_kg + pax_kg + fuel_kg * fuel_fraction;
        let landing_kg = empty_kg + pax_kg;
        let range_m = range_factor * (takeoff_kg / landing_kg).ln();
        coverage.push(CoveragePoint {
            range_m,
            transport_energy_mj_per_pax_km: fuel_kg * fuel_fraction * specific_energy
                / (n_pax * range_m)
                * 1e-3,
        });
    }

    // Long missions: off-load passengers, tanks full.
    let mut pax_fractions = linspace(1e-3, 1.0, samples);
    pax_fractions.reverse();
    for &pax_fraction in &pax_fractions {
        let takeoff_kg = empty_kg + pax_kg * pax_fraction + fuel_kg;
        let landing_kg = empty_kg + pax_kg * pax_fraction;
        let range_m = range_factor * (takeoff_kg / landing_kg).ln();
        coverage.push(CoveragePoint {
            range_m,
            transport_energy_mj_per_pax_km: fuel_kg * specific_energy
                / (pax_fraction * n_pax * range_m)
                * 1e-3,
        });
    }

    coverage
}
