//! Fuel-delivery line losses: Darcy–Weisbach pressure drop with the Blasius
//! turbulent friction factor, and the Fanno choking margin for the compressible
//! case.

/// Atmospheres per pascal denominator, for reporting.
const ATM_PA: f64 = 101_325.0;

/// Transport properties of the delivered fuel phase.
#[derive(Debug, Clone, Copy)]
pub struct FluidProperties {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub speed_of_sound_m_s: f64,
    pub gamma: f64,
}

impl FluidProperties {
    /// Saturated liquid hydrogen at 22 K; viscosity is the mean of the ortho-
    /// and para-hydrogen values (KAERI/TR-2723/2004, p. 26).
    pub fn liquid_hydrogen() -> Self {
        Self {
            density_kg_m3: 68.73,
            viscosity_pa_s: (12.84e-6 + 12.53e-6) / 2.0,
            speed_of_sound_m_s: 1_246.0,
            gamma: 1.0,
        }
    }

    /// Cold gaseous hydrogen at 33 K; viscosity is nearly temperature- and
    /// pressure-independent (KAERI/TR-2723/2004, p. 25).
    pub fn gaseous_hydrogen() -> Self {
        Self {
            density_kg_m3: 2.067,
            viscosity_pa_s: 1.696e-6,
            speed_of_sound_m_s: 374.0,
            gamma: 1.4,
        }
    }
}

/// A fuel line run at fixed mass flow.
#[derive(Debug, Clone, Copy)]
pub struct PipeRun {
    pub mass_flow_rate_kg_s: f64,
    pub diameter_m: f64,
    pub length_m: f64,
}

/// Derived flow state and loss figures for one line run.
#[derive(Debug, Clone, Copy)]
pub struct PipeAnalysis {
    pub velocity_m_s: f64,
    pub dynamic_pressure_pa: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub pressure_loss_pa: f64,
    pub mach: f64,
    pub fanno_parameter: f64,
    /// Duct length at which the flow would choke (m).
    pub fanno_length_m: f64,
}

impl PipeAnalysis {
    /// Pressure loss expressed in atmospheres.
    pub fn pressure_loss_atm(&self) -> f64 {
        self.pressure_loss_pa / ATM_PA
    }
}

/// Fanno parameter 4·f_F·L*/D for adiabatic constant-area duct flow with
/// friction, from the inlet Mach number.
pub fn fanno_parameter(mach: f64, gamma: f64) -> f64 {
    let m2 = mach.powi(2);
    let term1 = (1.0 - m2) / (gamma * m2);
    let term2 = (gamma + 1.0) / (2.0 * gamma);
    let term3 = (m2 / ((2.0 / (gamma + 1.0)) * (1.0 + ((gamma - 1.0) / 2.0) * m2))).ln();
    term1 + term2 * term3
}

/// Analyze a line run: Blasius friction factor, Darcy–Weisbach loss, and the
/// Fanno choking length.
pub fn analyze_pipe(run: &PipeRun, fluid: &FluidProperties) -> PipeAnalysis {
    let area = std::f64::consts::FRAC_PI_4 * run.diameter_m.powi(2);
    let velocity = run.mass_flow_rate_kg_s / (fluid.density_kg_m3 * area);
    let dynamic_pressure = 0.5 * fluid.density_kg_m3 * velocity.powi(2);
    let reynolds = fluid.density_kg_m3 * velocity * run.diameter_m / fluid.viscosity_pa_s;
    let friction_factor = 0.316 * reynolds.powf(-0.25);
    let pressure_loss = run.length_m * dynamic_pressure / run.diameter_m * friction_factor;

    let mach = velocity / fluid.speed_of_sound_m_s;
    let fanno = fanno_parameter(mach, fluid.gamma);

    PipeAnalysis {
        velocity_m_s: velocity,
        dynamic_pressure_pa: dynamic_pressure,
        reynolds,
        friction_factor,
        pressure_loss_pa: pressure_loss,
        mach,
        fanno_parameter: fanno,
        fanno_length_m: fanno * run.diameter_m / 4.0 / friction_factor,
    }
}
