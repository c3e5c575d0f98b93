//! Mass accounting for the LH2 transport study: a small mass-properties
//! algebra, the fixed subsystem tag set, and the empirical regressions that
//! populate it.

pub mod breakdown;
pub mod properties;
pub mod regressions;

pub use breakdown::{MassBreakdown, Subsystem};
pub use properties::MassProperties;
