//! Fuselage loft: an ordered sequence of circular cross-sections along the
//! body axis, assembled from nose, tank, cabin, and tail segments.

use lh2_core::remap::remap;
use lh2_core::spacing::{linspace, sinspace};

/// One circular fuselage cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuselageXSec {
    /// Station position along the body axis (m).
    pub x_m: f64,
    /// Centerline vertical offset at this station (m).
    pub z_m: f64,
    /// Section radius (m).
    pub radius_m: f64,
}

/// A fuselage loft as an ordered station list, nose to tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Fuselage {
    pub xsecs: Vec<FuselageXSec>,
}

impl Fuselage {
    /// Assemble a fuselage from consecutive segments, dropping the duplicated
    /// shared station at every interior join.
    pub fn from_segments(segments: Vec<Vec<FuselageXSec>>) -> Self {
        Self {
            xsecs: concat_segments(segments),
        }
    }

    /// Overall length along the body axis (m).
    pub fn length_m(&self) -> f64 {
        match (self.xsecs.first(), self.xsecs.last()) {
            (Some(first), Some(last)) => last.x_m - first.x_m,
            _ => 0.0,
        }
    }

    /// Maximum section diameter (m).
    pub fn max_diameter_m(&self) -> f64 {
        2.0 * self
            .xsecs
            .iter()
            .map(|xsec| xsec.radius_m)
            .fold(0.0, f64::max)
    }

    /// Wetted area from the lateral surfaces of the inter-station frustums (m²).
    pub fn wetted_area_m2(&self) -> f64 {
        self.xsecs
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                let axial = ((b.x_m - a.x_m).powi(2) + (b.z_m - a.z_m).powi(2)).sqrt();
                let slant = (axial.powi(2) + (b.radius_m - a.radius_m).powi(2)).sqrt();
                std::f64::consts::PI * (a.radius_m + b.radius_m) * slant
            })
            .sum()
    }

    /// Slenderness ratio length/diameter, the form-factor input.
    pub fn fineness_ratio(&self) -> f64 {
        self.length_m() / self.max_diameter_m()
    }
}

/// Concatenate station segments, keeping the shared boundary station only
/// once: every segment except the last contributes all stations but its final
/// one.
pub fn concat_segments(segments: Vec<Vec<FuselageXSec>>) -> Vec<FuselageXSec> {
    let count = segments.len();
    let mut xsecs = Vec::new();
    for (i, mut segment) in segments.into_iter().enumerate() {
        if i + 1 < count {
            segment.pop();
        }
        xsecs.extend(segment);
    }
    xsecs
}

/// Nose segment: `n` sine-eased stations (denser at the tip) with a
/// quarter-circle radius growth and a parabolic centerline droop.
pub fn nose_segment(x_start_m: f64, x_end_m: f64, radius_m: f64, n: usize) -> Vec<FuselageXSec> {
    sinspace(0.0, 1.0, n)
        .into_iter()
        .map(|xi| FuselageXSec {
            x_m: remap(xi, 0.0, 1.0, x_start_m, x_end_m),
            z_m: -0.3 * (1.0 - xi).powi(2) * radius_m,
            radius_m: (1.0 - (1.0 - xi).powi(2)).max(0.0).sqrt() * radius_m,
        })
        .collect()
}

/// Constant-radius segment (tank or cabin barrel): two stations on the
/// centerline.
pub fn constant_segment(x_start_m: f64, x_end_m: f64, radius_m: f64) -> Vec<FuselageXSec> {
    vec![
        FuselageXSec {
            x_m: x_start_m,
            z_m: 0.0,
            radius_m,
        },
        FuselageXSec {
            x_m: x_end_m,
            z_m: 0.0,
            radius_m,
        },
    ]
}

/// Tail segment: `n` uniform stations with a power-law upsweep and matching
/// radius taper to a point.
pub fn tail_segment(x_start_m: f64, x_end_m: f64, radius_m: f64, n: usize) -> Vec<FuselageXSec> {
    linspace(0.0, 1.0, n)
        .into_iter()
        .map(|xi| FuselageXSec {
            x_m: remap(xi, 0.0, 1.0, x_start_m, x_end_m),
            z_m: xi.powf(1.5) * radius_m,
            radius_m: (1.0 - xi.powf(1.5)) * radius_m,
        })
        .collect()
}
