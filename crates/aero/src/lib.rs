//! Aerodynamics for the LH2 transport study: airfoil section polars with an
//! on-disk JSON cache, and a classical component buildup (DATCOM lift slope,
//! flat-plate skin friction with form factors, Oswald induced drag, Korn wave
//! drag) that turns an airplane geometry and an operating point into forces.

pub mod airfoil;
pub mod buildup;
pub mod polar;

pub use airfoil::Airfoil;
pub use buildup::{AeroBuildup, AeroForces, Airplane, LiftingSurface, OperatingPoint};
pub use polar::{AirfoilPolar, PolarCacheError, PolarSet};
