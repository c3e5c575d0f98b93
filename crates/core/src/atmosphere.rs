//! 1976 standard atmosphere, valid through the stratopause (47 km geopotential).

use crate::constants::{GAMMA_AIR, R_AIR};

/// Standard gravity used by the barometric layer integration (m/s²).
const G0: f64 = 9.806_65;

/// Layer table: (base geopotential altitude m, base temperature K, lapse K/m, base pressure Pa).
/// Base pressures are the analytic layer-boundary values of the 1976 standard.
const LAYERS: [(f64, f64, f64, f64); 5] = [
    (0.0, 288.15, -0.0065, 101_325.0),
    (11_000.0, 216.65, 0.0, 22_632.06),
    (20_000.0, 216.65, 0.001, 5_474.889),
    (32_000.0, 228.65, 0.0028, 868.018_7),
    (47_000.0, 270.65, 0.0, 110.906_3),
];

/// Atmospheric state at a fixed geopotential altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub altitude_m: f64,
}

impl Atmosphere {
    /// Atmosphere at the given geopotential altitude (metres). Altitudes below
    /// sea level extrapolate the troposphere lapse; altitudes above 47 km
    /// continue isothermally at the stratopause temperature.
    pub fn at_altitude(altitude_m: f64) -> Self {
        Self { altitude_m }
    }

    fn layer(&self) -> (f64, f64, f64, f64) {
        let mut current = LAYERS[0];
        for layer in LAYERS.iter().skip(1) {
            if self.altitude_m >= layer.0 {
                current = *layer;
            }
        }
        current
    }

    /// Static temperature (K).
    pub fn temperature_k(&self) -> f64 {
        let (base_alt, base_temp, lapse, _) = self.layer();
        base_temp + lapse * (self.altitude_m - base_alt)
    }

    /// Static pressure (Pa).
    pub fn pressure_pa(&self) -> f64 {
        let (base_alt, base_temp, lapse, base_pressure) = self.layer();
        let dh = self.altitude_m - base_alt;
        if lapse == 0.0 {
            base_pressure * (-G0 * dh / (R_AIR * base_temp)).exp()
        } else {
            let temp_ratio = (base_temp + lapse * dh) / base_temp;
            base_pressure * temp_ratio.powf(-G0 / (R_AIR * lapse))
        }
    }

    /// Density from the ideal-gas law (kg/m³).
    pub fn density_kg_m3(&self) -> f64 {
        self.pressure_pa() / (R_AIR * self.temperature_k())
    }

    /// Speed of sound (m/s).
    pub fn speed_of_sound_m_s(&self) -> f64 {
        (GAMMA_AIR * R_AIR * self.temperature_k()).sqrt()
    }

    /// Dynamic viscosity from Sutherland's law (Pa·s).
    pub fn dynamic_viscosity_pa_s(&self) -> f64 {
        let t = self.temperature_k();
        1.458e-6 * t.powf(1.5) / (t + 110.4)
    }
}
