//! Report and figure rendering for the LH2 transport study.
//!
//! The sizing model itself lives in the workspace member crates (`lh2_design`
//! and below). Keeping the presentation layer in this library crate lets the
//! study binaries under `src/bin` share one report format and one plotting
//! style.

pub mod plot;
pub mod report;

/// Returns the version of the study toolchain.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
