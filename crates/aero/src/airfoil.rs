//! Airfoil section definitions and the compact section model that generates
//! their polars.

use std::f64::consts::TAU;

/// An airfoil section, described by the handful of parameters the buildup and
/// the mass regressions consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airfoil {
    /// Cache key and display name.
    pub name: &'static str,
    /// Maximum thickness as a fraction of chord.
    pub thickness_ratio: f64,
    /// Zero-lift angle of attack (degrees).
    pub zero_lift_alpha_deg: f64,
    /// Chordwise station of maximum thickness, as a fraction of chord.
    pub max_thickness_x: f64,
    /// Section lift coefficient at stall.
    pub cl_max: f64,
}

impl Airfoil {
    /// The 737 midspan supercritical section, the wing airfoil.
    pub fn b737c() -> Self {
        Self {
            name: "b737c",
            thickness_ratio: 0.126,
            zero_lift_alpha_deg: -2.0,
            max_thickness_x: 0.37,
            cl_max: 1.7,
        }
    }

    /// NACA 0012, the horizontal-stabilizer airfoil.
    pub fn naca0012() -> Self {
        Self {
            name: "naca0012",
            thickness_ratio: 0.12,
            zero_lift_alpha_deg: 0.0,
            max_thickness_x: 0.30,
            cl_max: 1.5,
        }
    }

    /// NACA 0008, the vertical-stabilizer airfoil.
    pub fn naca0008() -> Self {
        Self {
            name: "naca0008",
            thickness_ratio: 0.08,
            zero_lift_alpha_deg: 0.0,
            max_thickness_x: 0.30,
            cl_max: 1.2,
        }
    }

    /// Section lift-curve slope, thin-airfoil theory with the thickness
    /// correction (per radian).
    pub fn lift_slope_per_rad(&self) -> f64 {
        TAU * (1.0 + 0.77 * self.thickness_ratio)
    }

    /// Section lift coefficient at the given angle of attack, linear to the
    /// stall plateau.
    pub fn section_cl(&self, alpha_deg: f64) -> f64 {
        let cl = self.lift_slope_per_rad() * (alpha_deg - self.zero_lift_alpha_deg).to_radians();
        cl.clamp(-self.cl_max, self.cl_max)
    }

    /// Section profile-drag coefficient at the given lift coefficient: a
    /// parabolic drag bucket centered on the camber lift.
    pub fn section_cd(&self, cl: f64) -> f64 {
        let cd_min = 0.0040 + 0.02 * self.thickness_ratio;
        let cl_min_drag = self.section_cl(0.0);
        cd_min + 0.01 * (cl - cl_min_drag).powi(2)
    }
}
