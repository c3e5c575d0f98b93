//! Airfoil polars and their on-disk JSON cache.
//!
//! A polar is a tabulated sweep of section lift and profile drag against
//! angle of attack. Polars are cheap to regenerate but the design loop reads
//! them thousands of times, so each airfoil's table is memoized to
//! `<cache_dir>/<name>.json` and reloaded on subsequent runs.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use lh2_core::spacing::linspace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::airfoil::Airfoil;

/// Angle-of-attack grid of a generated polar (degrees).
pub const POLAR_ALPHA_MIN_DEG: f64 = -15.0;
pub const POLAR_ALPHA_MAX_DEG: f64 = 15.0;
pub const POLAR_POINTS: usize = 50;

/// A tabulated section polar, the cache file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilPolar {
    pub name: String,
    pub alpha_deg: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
}

impl AirfoilPolar {
    /// Section lift coefficient at `alpha_deg`, linearly interpolated.
    pub fn cl_at(&self, alpha_deg: f64) -> f64 {
        interp1(&self.alpha_deg, &self.cl, alpha_deg)
    }

    /// Section profile-drag coefficient at `alpha_deg`, linearly interpolated.
    pub fn cd_at(&self, alpha_deg: f64) -> f64 {
        interp1(&self.alpha_deg, &self.cd, alpha_deg)
    }

    /// Minimum profile drag over the tabulated sweep.
    pub fn min_cd(&self) -> f64 {
        self.cd.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Profile-drag rise above the bucket minimum at `alpha_deg`. The buildup
    /// adds this on top of the flat-plate friction floor, which already
    /// accounts for the minimum.
    pub fn profile_cd_rise_at(&self, alpha_deg: f64) -> f64 {
        (self.cd_at(alpha_deg) - self.min_cd()).max(0.0)
    }
}

/// Piecewise-linear interpolation over a sorted grid, clamped at the ends.
fn interp1(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }
    for i in 1..xs.len() {
        if x <= xs[i] {
            let t = (x - xs[i - 1]) / (xs[i] - xs[i - 1]);
            return ys[i - 1] + t * (ys[i] - ys[i - 1]);
        }
    }
    ys[ys.len() - 1]
}

/// Polar cache access failures.
#[derive(Debug, Error)]
pub enum PolarCacheError {
    #[error("failed to access polar cache: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed polar cache file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("polar cache file holds {found:?}, expected {expected:?}")]
    NameMismatch { expected: String, found: String },
}

impl Airfoil {
    /// Generate this airfoil's polar from the section model.
    pub fn generate_polar(&self) -> AirfoilPolar {
        let alpha_deg = linspace(POLAR_ALPHA_MIN_DEG, POLAR_ALPHA_MAX_DEG, POLAR_POINTS);
        let cl: Vec<f64> = alpha_deg.iter().map(|&a| self.section_cl(a)).collect();
        let cd: Vec<f64> = cl.iter().map(|&cl| self.section_cd(cl)).collect();
        AirfoilPolar {
            name: self.name.to_string(),
            alpha_deg,
            cl,
            cd,
        }
    }

    /// Load this airfoil's polar from `<cache_dir>/<name>.json`, generating
    /// and writing the cache file if it does not exist yet.
    pub fn polar(&self, cache_dir: &Path) -> Result<AirfoilPolar, PolarCacheError> {
        let path = cache_dir.join(format!("{}.json", self.name));
        if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let polar: AirfoilPolar = serde_json::from_reader(reader)?;
            if polar.name != self.name {
                return Err(PolarCacheError::NameMismatch {
                    expected: self.name.to_string(),
                    found: polar.name,
                });
            }
            return Ok(polar);
        }
        let polar = self.generate_polar();
        std::fs::create_dir_all(cache_dir)?;
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, &polar)?;
        Ok(polar)
    }
}

/// The three polars an airplane's buildup needs, loaded once per process and
/// shared across solve iterations.
#[derive(Debug, Clone)]
pub struct PolarSet {
    pub wing: AirfoilPolar,
    pub hstab: AirfoilPolar,
    pub vstab: AirfoilPolar,
}

impl PolarSet {
    /// Load (or generate) the polars for the three surface airfoils.
    pub fn load(
        wing: &Airfoil,
        hstab: &Airfoil,
        vstab: &Airfoil,
        cache_dir: &Path,
    ) -> Result<Self, PolarCacheError> {
        Ok(Self {
            wing: wing.polar(cache_dir)?,
            hstab: hstab.polar(cache_dir)?,
            vstab: vstab.polar(cache_dir)?,
        })
    }
}
