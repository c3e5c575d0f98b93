//! Core units, constants, and numeric helpers for the LH2 transport study workspace.

pub mod atmosphere;

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used throughout the sizing model (m/s²).
    pub const G: f64 = 9.81;
    /// Specific gas constant of dry air (J/(kg·K)).
    pub const R_AIR: f64 = 287.052_87;
    /// Ratio of specific heats of air.
    pub const GAMMA_AIR: f64 = 1.4;
    /// Specific energy of Jet A kerosene (J/kg). Reference fuel for engine scaling.
    pub const KEROSENE_SPECIFIC_ENERGY_J_KG: f64 = 43.02e6;
    /// Joules per kilowatt-hour.
    pub const J_PER_KWH: f64 = 3.6e6;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Metres per foot.
    pub const FOOT: f64 = 0.3048;
    /// Metres per inch.
    pub const INCH: f64 = 0.0254;
    /// Metres per nautical mile.
    pub const NAUTICAL_MILE: f64 = 1_852.0;
    /// Kilograms per pound-mass.
    pub const POUND_MASS: f64 = 0.453_592_37;
    /// Newtons per pound-force.
    pub const POUND_FORCE: f64 = 4.448_221_615_260_5;

    /// Convert feet to metres.
    #[inline]
    pub fn ft_to_m(v: f64) -> f64 {
        v * FOOT
    }

    /// Convert metres to feet.
    #[inline]
    pub fn m_to_ft(v: f64) -> f64 {
        v / FOOT
    }

    /// Convert inches to metres.
    #[inline]
    pub fn in_to_m(v: f64) -> f64 {
        v * INCH
    }

    /// Convert knots to metres per second.
    #[inline]
    pub fn kn_to_ms(v: f64) -> f64 {
        v * NAUTICAL_MILE / 3_600.0
    }

    /// Convert feet per minute to metres per second.
    #[inline]
    pub fn ftmin_to_ms(v: f64) -> f64 {
        v * FOOT / 60.0
    }

    /// Convert nautical miles to metres.
    #[inline]
    pub fn nmi_to_m(v: f64) -> f64 {
        v * NAUTICAL_MILE
    }

    /// Convert metres to nautical miles.
    #[inline]
    pub fn m_to_nmi(v: f64) -> f64 {
        v / NAUTICAL_MILE
    }

    /// Convert pounds-mass to kilograms.
    #[inline]
    pub fn lbm_to_kg(v: f64) -> f64 {
        v * POUND_MASS
    }

    /// Convert kilograms to pounds-mass.
    #[inline]
    pub fn kg_to_lbm(v: f64) -> f64 {
        v / POUND_MASS
    }

    /// Convert pounds-force to newtons.
    #[inline]
    pub fn lbf_to_n(v: f64) -> f64 {
        v * POUND_FORCE
    }

    /// Convert newtons to pounds-force.
    #[inline]
    pub fn n_to_lbf(v: f64) -> f64 {
        v / POUND_FORCE
    }
}

/// Linear re-mapping between value ranges.
pub mod remap {
    /// Rescale `x` from the range [`min_in`, `max_in`] to [`min_out`, `max_out`].
    ///
    /// Collapsed input bounds (`max_in == min_in`) divide by zero and yield a
    /// non-finite result; callers own that precondition.
    #[inline]
    pub fn remap(x: f64, min_in: f64, max_in: f64, min_out: f64, max_out: f64) -> f64 {
        min_out + (x - min_in) * (max_out - min_out) / (max_in - min_in)
    }

    /// Rescale every element of `xs` from [`min_in`, `max_in`] to [`min_out`, `max_out`].
    pub fn remap_all(xs: &[f64], min_in: f64, max_in: f64, min_out: f64, max_out: f64) -> Vec<f64> {
        xs.iter()
            .map(|&x| remap(x, min_in, max_in, min_out, max_out))
            .collect()
    }
}

/// Point-spacing generators for profile discretisation and sweep grids.
pub mod spacing {
    use std::f64::consts::FRAC_PI_2;

    /// `n` evenly spaced points from `start` to `stop`, endpoints included.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n).map(|i| start + step * i as f64).collect()
            }
        }
    }

    /// `n` sine-eased points from `start` to `stop`, clustered towards `start`.
    ///
    /// Used for blunt profile tips where curvature concentrates near the
    /// leading station, and for sweep grids that should resolve one end.
    pub fn sinspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
        linspace(0.0, FRAC_PI_2, n)
            .into_iter()
            .map(|theta| start + (stop - start) * (1.0 - theta.cos()))
            .collect()
    }
}
