//! Parametric geometry for the LH2 transport study: fuselage lofts built from
//! ordered cross-section stations, and lifting surfaces built from chord/sweep/
//! dihedral planform parameters.

pub mod fuselage;
pub mod surface;

pub use fuselage::{
    Fuselage, FuselageXSec, concat_segments, constant_segment, nose_segment, tail_segment,
};
pub use surface::{CrankedWingParams, Surface, TaperedSurfaceParams, WingXSec};
