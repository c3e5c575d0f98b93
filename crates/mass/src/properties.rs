//! Mass, center of gravity, and principal inertias with superposition algebra.

use std::ops::{Add, Div, Mul, Sub};

use serde::Serialize;

/// A rigid-body mass element: mass, cg position, and principal moments of
/// inertia about its own cg. Products of inertia are not tracked.
///
/// Addition superposes mass and first moments and transports inertias to the
/// combined cg (parallel axis). Scalar multiplication scales mass and inertia
/// and leaves the cg where it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassProperties {
    pub mass_kg: f64,
    pub x_cg_m: f64,
    pub y_cg_m: f64,
    pub z_cg_m: f64,
    pub ixx_kg_m2: f64,
    pub iyy_kg_m2: f64,
    pub izz_kg_m2: f64,
}

impl MassProperties {
    /// The additive identity: no mass anywhere.
    pub const ZERO: Self = Self {
        mass_kg: 0.0,
        x_cg_m: 0.0,
        y_cg_m: 0.0,
        z_cg_m: 0.0,
        ixx_kg_m2: 0.0,
        iyy_kg_m2: 0.0,
        izz_kg_m2: 0.0,
    };

    /// A point mass on the centerline at the given station.
    pub fn point_mass(mass_kg: f64, x_cg_m: f64) -> Self {
        Self {
            mass_kg,
            x_cg_m,
            ..Self::ZERO
        }
    }

    /// Build from radii of gyration about the element's own cg.
    pub fn from_radius_of_gyration(
        mass_kg: f64,
        x_cg_m: f64,
        radius_of_gyration_x_m: f64,
        radius_of_gyration_y_m: f64,
        radius_of_gyration_z_m: f64,
    ) -> Self {
        Self {
            mass_kg,
            x_cg_m,
            y_cg_m: 0.0,
            z_cg_m: 0.0,
            ixx_kg_m2: mass_kg * radius_of_gyration_x_m.powi(2),
            iyy_kg_m2: mass_kg * radius_of_gyration_y_m.powi(2),
            izz_kg_m2: mass_kg * radius_of_gyration_z_m.powi(2),
        }
    }

    /// First moment of mass about the origin (kg·m), the quantity that adds
    /// linearly under composition.
    pub fn first_moment_kg_m(&self) -> [f64; 3] {
        [
            self.mass_kg * self.x_cg_m,
            self.mass_kg * self.y_cg_m,
            self.mass_kg * self.z_cg_m,
        ]
    }
}

impl Add for MassProperties {
    type Output = MassProperties;

    fn add(self, other: MassProperties) -> MassProperties {
        let mass = self.mass_kg + other.mass_kg;
        let (x, y, z) = if mass == 0.0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                (self.mass_kg * self.x_cg_m + other.mass_kg * other.x_cg_m) / mass,
                (self.mass_kg * self.y_cg_m + other.mass_kg * other.y_cg_m) / mass,
                (self.mass_kg * self.z_cg_m + other.mass_kg * other.z_cg_m) / mass,
            )
        };
        let transport = |p: &MassProperties, own: f64, d1: f64, d2: f64| {
            own + p.mass_kg * (d1.powi(2) + d2.powi(2))
        };
        MassProperties {
            mass_kg: mass,
            x_cg_m: x,
            y_cg_m: y,
            z_cg_m: z,
            ixx_kg_m2: transport(&self, self.ixx_kg_m2, self.y_cg_m - y, self.z_cg_m - z)
                + transport(&other, other.ixx_kg_m2, other.y_cg_m - y, other.z_cg_m - z),
            iyy_kg_m2: transport(&self, self.iyy_kg_m2, self.x_cg_m - x, self.z_cg_m - z)
                + transport(&other, other.iyy_kg_m2, other.x_cg_m - x, other.z_cg_m - z),
            izz_kg_m2: transport(&self, self.izz_kg_m2, self.x_cg_m - x, self.y_cg_m - y)
                + transport(&other, other.izz_kg_m2, other.x_cg_m - x, other.y_cg_m - y),
        }
    }
}

impl Sub for MassProperties {
    type Output = MassProperties;

    fn sub(self, other: MassProperties) -> MassProperties {
        self + other * -1.0
    }
}

impl Mul<f64> for MassProperties {
    type Output = MassProperties;

    fn mul(self, k: f64) -> MassProperties {
        MassProperties {
            mass_kg: self.mass_kg * k,
            x_cg_m: self.x_cg_m,
            y_cg_m: self.y_cg_m,
            z_cg_m: self.z_cg_m,
            ixx_kg_m2: self.ixx_kg_m2 * k,
            iyy_kg_m2: self.iyy_kg_m2 * k,
            izz_kg_m2: self.izz_kg_m2 * k,
        }
    }
}

impl Div<f64> for MassProperties {
    type Output = MassProperties;

    fn div(self, k: f64) -> MassProperties {
        self * (1.0 / k)
    }
}

impl std::iter::Sum for MassProperties {
    fn sum<I: Iterator<Item = MassProperties>>(iter: I) -> MassProperties {
        iter.fold(MassProperties::ZERO, Add::add)
    }
}
