//! The sizing model: design-point assembly, the constrained optimization
//! problem around it, and off-design performance sweeps.
//!
//! [`point`] turns a set of design-variable values into a fully assembled
//! [`DesignPoint`]: fuselage and lifting surfaces, a scaled engine, the full
//! subsystem mass breakdown, cruise aerodynamics, and Breguet range. [`model`]
//! wraps that assembly in an optimization problem whose free variables are the
//! tank length, gross weight, and cruise condition, and solves it (or families
//! of it, warm-started). [`performance`] evaluates a converged design off its
//! design mission.

pub mod model;
pub mod performance;
pub mod point;

pub use model::{
    DesignError, DesignProblem, DesignSolution, DesignVars, solve_range_family,
    solve_tank_fraction_sweep,
};
pub use performance::{CoveragePoint, off_design_coverage};
pub use point::{DesignPoint, DesignValues, build_design};
