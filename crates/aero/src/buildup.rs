//! Classical component aerodynamic buildup.
//!
//! Lift comes from the DATCOM finite-wing slope with a downwash-corrected
//! horizontal-tail contribution. Drag stacks component flat-plate skin
//! friction with Raymer form factors, the section drag-bucket rise from the
//! polars, an excrescence increment, Oswald induced drag, and Korn-equation
//! wave drag. The fidelity target is conceptual design: smooth in the design
//! variables so the optimizer can traverse it, and honest to within a drag
//! count or two of the handbook methods it is drawn from.

use std::f64::consts::{PI, TAU};

use lh2_core::atmosphere::Atmosphere;
use lh2_geometry::{Fuselage, Surface};

use crate::airfoil::Airfoil;
use crate::polar::PolarSet;

/// Airfoil efficiency factor in the DATCOM lift-slope denominator.
const ETA_AIRFOIL: f64 = 0.95;
/// Dynamic-pressure ratio at the horizontal tail.
const ETA_HSTAB: f64 = 0.9;
/// Korn airfoil technology factor for supercritical sections.
const KAPPA_A: f64 = 0.95;

/// A cruise flight condition at a fixed atmospheric state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub altitude_m: f64,
    pub mach: f64,
    pub alpha_deg: f64,
    pub flight_path_angle_deg: f64,
}

impl OperatingPoint {
    /// Ambient atmosphere at the operating altitude.
    pub fn atmosphere(&self) -> Atmosphere {
        Atmosphere::at_altitude(self.altitude_m)
    }

    /// Fraction of weight the lift must support on this flight path.
    pub fn weight_support_fraction(&self) -> f64 {
        self.flight_path_angle_deg.to_radians().cos()
    }

    /// True airspeed from the Mach number and ambient speed of sound (m/s).
    pub fn true_airspeed_m_s(&self) -> f64 {
        self.mach * self.atmosphere().speed_of_sound_m_s()
    }

    /// Freestream dynamic pressure (Pa).
    pub fn dynamic_pressure_pa(&self) -> f64 {
        0.5 * self.atmosphere().density_kg_m3() * self.true_airspeed_m_s().powi(2)
    }
}

/// A planform paired with its airfoil section.
#[derive(Debug, Clone)]
pub struct LiftingSurface {
    pub surface: Surface,
    pub airfoil: Airfoil,
}

/// The assembled airplane the buildup evaluates.
#[derive(Debug, Clone)]
pub struct Airplane {
    pub fuselage: Fuselage,
    pub wing: LiftingSurface,
    pub hstab: LiftingSurface,
    pub vstab: LiftingSurface,
    /// Excrescence/protuberance drag increment on the reference area.
    pub additional_cd: f64,
}

impl Airplane {
    /// Reference area: the wing planform (m²).
    pub fn reference_area_m2(&self) -> f64 {
        self.wing.surface.area_m2()
    }
}

/// Dimensional forces and their coefficients on the wing reference area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub lift_n: f64,
    pub drag_n: f64,
    pub cl: f64,
    pub cd: f64,
}

impl AeroForces {
    pub fn lift_to_drag(&self) -> f64 {
        self.lift_n / self.drag_n
    }
}

/// One buildup evaluation: an airplane at an operating point, with the
/// section polars loaded ahead of time.
#[derive(Debug, Clone, Copy)]
pub struct AeroBuildup<'a> {
    pub airplane: &'a Airplane,
    pub op_point: &'a OperatingPoint,
    pub polars: &'a PolarSet,
}

/// DATCOM finite-wing lift-curve slope (per radian). Valid subsonic; the
/// compressibility term collapses gracefully as Mach approaches one.
pub fn finite_wing_lift_slope_per_rad(aspect_ratio: f64, mach: f64, sweep_deg: f64) -> f64 {
    let beta_sq = 1.0 - mach.powi(2);
    let tan_sweep = sweep_deg.to_radians().tan();
    let term = (aspect_ratio / ETA_AIRFOIL).powi(2) * (beta_sq + tan_sweep.powi(2));
    TAU * aspect_ratio / (2.0 + (4.0 + term).sqrt())
}

/// Raymer's statistical Oswald span-efficiency fits, selected by
/// leading-edge sweep.
pub fn oswald_span_efficiency(aspect_ratio: f64, le_sweep_deg: f64) -> f64 {
    let ar_term = 1.0 - 0.045 * aspect_ratio.powf(0.68);
    if le_sweep_deg > 30.0 {
        4.61 * ar_term * le_sweep_deg.to_radians().cos().powf(0.15) - 3.1
    } else {
        1.78 * ar_term - 0.64
    }
}

/// Turbulent flat-plate skin-friction coefficient with the compressibility
/// correction.
pub fn flat_plate_cf(reynolds: f64, mach: f64) -> f64 {
    0.455 / reynolds.log10().powf(2.58) / (1.0 + 0.144 * mach.powi(2)).powf(0.65)
}

/// Raymer lifting-surface form factor.
fn surface_form_factor(airfoil: &Airfoil, mach: f64, sweep_deg: f64) -> f64 {
    let tc = airfoil.thickness_ratio;
    (1.0 + 0.6 / airfoil.max_thickness_x * tc + 100.0 * tc.powi(4))
        * (1.34 * mach.powf(0.18) * sweep_deg.to_radians().cos().powf(0.28))
}

/// Raymer body form factor from the fineness ratio.
fn fuselage_form_factor(fineness: f64) -> f64 {
    1.0 + 60.0 / fineness.powi(3) + fineness / 400.0
}

/// Exposed wetted area of a lifting surface, both sides (m²).
fn surface_wetted_area_m2(surface: &Surface, airfoil: &Airfoil) -> f64 {
    2.0 * (1.0 + 0.2 * airfoil.thickness_ratio) * surface.area_m2()
}

/// Korn-equation wave-drag increment at the given lift coefficient.
fn wave_drag_cd(mach: f64, cl: f64, airfoil: &Airfoil, sweep_deg: f64) -> f64 {
    let cos_sweep = sweep_deg.to_radians().cos();
    let mach_dd = KAPPA_A / cos_sweep
        - airfoil.thickness_ratio / cos_sweep.powi(2)
        - cl / (10.0 * cos_sweep.powi(3));
    let mach_crit = mach_dd - (0.1f64 / 80.0).powf(1.0 / 3.0);
    if mach > mach_crit {
        20.0 * (mach - mach_crit).powi(4)
    } else {
        0.0
    }
}

impl AeroBuildup<'_> {
    /// Evaluate the buildup, returning dimensional forces and coefficients.
    pub fn run(&self) -> AeroForces {
        let airplane = self.airplane;
        let op = self.op_point;
        let atmosphere = op.atmosphere();
        let mach = op.mach;
        let q_pa = op.dynamic_pressure_pa();
        let s_ref = airplane.reference_area_m2();
        let re_per_m = atmosphere.density_kg_m3() * op.true_airspeed_m_s()
            / atmosphere.dynamic_viscosity_pa_s();

        // Lift: DATCOM wing slope, tail in the wing downwash field.
        let wing = &airplane.wing;
        let ar_w = wing.surface.aspect_ratio();
        let sweep_w = wing.surface.mean_sweep_deg();
        let slope_w = finite_wing_lift_slope_per_rad(ar_w, mach, sweep_w);
        let alpha_w_deg = op.alpha_deg - wing.airfoil.zero_lift_alpha_deg;
        let cl_w = slope_w * alpha_w_deg.to_radians();

        let hstab = &airplane.hstab;
        let slope_h = finite_wing_lift_slope_per_rad(
            hstab.surface.aspect_ratio(),
            mach,
            hstab.surface.mean_sweep_deg(),
        );
        let downwash_gradient = 2.0 * slope_w / (PI * ar_w);
        let alpha_h_deg =
            op.alpha_deg - downwash_gradient * alpha_w_deg - hstab.airfoil.zero_lift_alpha_deg;
        let cl_h = slope_h * alpha_h_deg.to_radians();
        let hstab_area_ratio = hstab.surface.area_m2() / s_ref;

        let cl = cl_w + ETA_HSTAB * hstab_area_ratio * cl_h;

        // Parasite drag: flat plate times form factor over each component's
        // wetted area, plus the section drag-bucket rise from the polars.
        let mut cd0 = airplane.additional_cd;
        for (lifting, polar, alpha_deg) in [
            (wing, &self.polars.wing, op.alpha_deg),
            (hstab, &self.polars.hstab, alpha_h_deg + hstab.airfoil.zero_lift_alpha_deg),
            (&airplane.vstab, &self.polars.vstab, 0.0),
        ] {
            let re = re_per_m * lifting.surface.mean_aerodynamic_chord_m();
            let cf = flat_plate_cf(re, mach);
            let ff = surface_form_factor(&lifting.airfoil, mach, lifting.surface.mean_sweep_deg());
            let s_wet = surface_wetted_area_m2(&lifting.surface, &lifting.airfoil);
            cd0 += cf * ff * s_wet / s_ref;
            cd0 += polar.profile_cd_rise_at(alpha_deg) * lifting.surface.area_m2() / s_ref;
        }
        {
            let fuselage = &airplane.fuselage;
            let re = re_per_m * fuselage.length_m();
            let cf = flat_plate_cf(re, mach);
            let ff = fuselage_form_factor(fuselage.fineness_ratio());
            cd0 += cf * ff * fuselage.wetted_area_m2() / s_ref;
        }

        // Induced and wave drag.
        let oswald = oswald_span_efficiency(ar_w, wing.surface.le_sweep_deg());
        let cd_induced = cl.powi(2) / (PI * ar_w * oswald);
        let cd_wave = wave_drag_cd(mach, cl_w, &wing.airfoil, sweep_w);

        let cd = cd0 + cd_induced + cd_wave;
        AeroForces {
            lift_n: q_pa * s_ref * cl,
            drag_n: q_pa * s_ref * cd,
            cl,
            cd,
        }
    }
}
