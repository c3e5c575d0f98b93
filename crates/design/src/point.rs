//! Assembly of one fully-evaluated design point from a set of design-variable
//! values.
//!
//! The assembly order mirrors the sizing chain: fuselage stations, lifting
//! surfaces, engines scaled to the climb thrust requirement, the subsystem
//! mass buildup, cruise aerodynamics at the half-fuel weight, and finally
//! Breguet range. Everything here is plain arithmetic on the supplied values;
//! the optimization model in [`crate::model`] decides which of them float.

use std::f64::consts::PI;

use lh2_aero::{
    AeroBuildup, AeroForces, Airfoil, Airplane, LiftingSurface, OperatingPoint, PolarSet,
};
use lh2_config::{DesignConfig, FuelProperties};
use lh2_core::atmosphere::Atmosphere;
use lh2_core::units;
use lh2_geometry::{
    CrankedWingParams, Fuselage, Surface, TaperedSurfaceParams, fuselage,
};
use lh2_mass::{MassBreakdown, MassProperties, regressions};
use lh2_propulsion::{Engine, FuelTank, ReferenceEngine, size_thrust};

/// Fuselage nose length as a multiple of the cabin diameter.
const NOSE_FINENESS_RATIO: f64 = 1.67;
/// Tail cone length as a multiple of the cabin diameter.
const TAIL_FINENESS_RATIO: f64 = 2.62;
/// Points along the nose and tail profiles.
const FUSELAGE_PROFILE_POINTS: usize = 10;

const WING_DIHEDRAL_DEG: f64 = 6.0;
const WING_YEHUDI_SPAN_FRACTION: f64 = 0.25;
const WING_TIP_CHORD_FRACTION: f64 = 0.14;
const STAB_TAPER_RATIO: f64 = 0.35;

/// Trim, excrescence, and leakage drag not captured by the buildup.
const ADDITIONAL_CD: f64 = 0.0060;

/// 2.5 g limit load with a 1.5 safety factor.
const ULTIMATE_LOAD_FACTOR: f64 = 1.5 * 2.5;
const N_ENGINES: f64 = 2.0;

/// Assumed lift-to-drag ratio for the thrust sizing, before the real
/// aerodynamics are known.
const THRUST_SIZING_LD: f64 = 15.0;
const DESIGN_CLIMB_RATE_FT_MIN: f64 = 2000.0;
const DESIGN_V_CLIMB_KN: f64 = 250.0;

/// Cabin pressurization altitude, for the buoyancy term.
const CABIN_PRESSURE_ALTITUDE_FT: f64 = 8000.0;

/// One value per design variable of the sizing model, in SI units.
///
/// The planform and cabin values stay frozen at their baseline during a
/// normal solve; the tank length, gross weight, and cruise condition float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignValues {
    pub cabin_diameter_m: f64,
    pub cabin_length_m: f64,
    /// The aft tank shares this length.
    pub fwd_tank_length_m: f64,
    pub wing_span_m: f64,
    pub wing_root_chord_m: f64,
    pub wing_le_sweep_deg: f64,
    pub wing_x_le_m: f64,
    pub hstab_span_m: f64,
    pub hstab_root_chord_m: f64,
    pub hstab_le_sweep_deg: f64,
    pub vstab_span_m: f64,
    pub vstab_root_chord_m: f64,
    pub vstab_le_sweep_deg: f64,
    pub design_togw_kg: f64,
    pub mach: f64,
    pub altitude_m: f64,
    pub alpha_deg: f64,
}

impl DesignValues {
    /// The B777-class starting point of the sizing study.
    pub fn baseline() -> Self {
        let cabin_diameter_m = units::ft_to_m(20.4);
        let cabin_length_m = units::ft_to_m(123.2);
        let fwd_tank_length_m = 6.0;
        let wing_root_chord_m = units::ft_to_m(51.5);

        // Wing root centered under the cabin.
        let x_fwd_tank_to_cabin = NOSE_FINENESS_RATIO * cabin_diameter_m + fwd_tank_length_m;
        let x_cabin_to_aft_tank = x_fwd_tank_to_cabin + cabin_length_m;
        let wing_x_le_m =
            0.5 * (x_fwd_tank_to_cabin + x_cabin_to_aft_tank) - 0.5 * wing_root_chord_m;

        Self {
            cabin_diameter_m,
            cabin_length_m,
            fwd_tank_length_m,
            wing_span_m: units::ft_to_m(214.0),
            wing_root_chord_m,
            wing_le_sweep_deg: 34.0,
            wing_x_le_m,
            hstab_span_m: units::ft_to_m(70.8),
            hstab_root_chord_m: units::ft_to_m(23.0),
            hstab_le_sweep_deg: 39.0,
            vstab_span_m: units::ft_to_m(29.6),
            vstab_root_chord_m: units::ft_to_m(22.0),
            vstab_le_sweep_deg: 45.0,
            design_togw_kg: 299_370.0,
            mach: 0.82,
            altitude_m: units::ft_to_m(35e3),
            alpha_deg: 10.0,
        }
    }
}

/// Longitudinal fuselage stations, nose datum at x = 0.
#[derive(Debug, Clone, Copy)]
struct Stations {
    nose: f64,
    nose_to_fwd_tank: f64,
    fwd_tank_to_cabin: f64,
    cabin_to_aft_tank: f64,
    aft_tank_to_tail: f64,
    tail: f64,
}

impl Stations {
    fn of(v: &DesignValues) -> Self {
        let nose = 0.0;
        let nose_to_fwd_tank = nose + NOSE_FINENESS_RATIO * v.cabin_diameter_m;
        let fwd_tank_to_cabin = nose_to_fwd_tank + v.fwd_tank_length_m;
        let cabin_to_aft_tank = fwd_tank_to_cabin + v.cabin_length_m;
        let aft_tank_to_tail = cabin_to_aft_tank + v.fwd_tank_length_m;
        let tail = aft_tank_to_tail + TAIL_FINENESS_RATIO * v.cabin_diameter_m;
        Self {
            nose,
            nose_to_fwd_tank,
            fwd_tank_to_cabin,
            cabin_to_aft_tank,
            aft_tank_to_tail,
            tail,
        }
    }

    fn cabin_midpoint(&self) -> f64 {
        (self.fwd_tank_to_cabin + self.cabin_to_aft_tank) / 2.0
    }

    fn fwd_tank_midpoint(&self) -> f64 {
        (self.nose_to_fwd_tank + self.fwd_tank_to_cabin) / 2.0
    }

    fn aft_tank_midpoint(&self) -> f64 {
        (self.cabin_to_aft_tank + self.aft_tank_to_tail) / 2.0
    }

    /// Pressurized plus tank length, the fuselage weight's reference.
    fn structural_length(&self) -> f64 {
        self.aft_tank_to_tail - self.nose
    }
}

/// A fully-evaluated design point.
#[derive(Debug, Clone)]
pub struct DesignPoint {
    pub values: DesignValues,
    pub n_pax: f64,
    pub mission_range_m: f64,
    pub fuel: FuelProperties,
    pub airplane: Airplane,
    pub engine: Engine,
    pub isp_s: f64,
    pub breakdown: MassBreakdown,
    pub op_point: OperatingPoint,
    pub aero: AeroForces,
    pub flight_range_m: f64,
}

impl DesignPoint {
    /// Sum of every subsystem that flies, fuel included (kg).
    pub fn computed_togw_kg(&self) -> f64 {
        self.breakdown.togw().mass_kg
    }

    /// Operating empty mass (kg).
    pub fn empty_mass_kg(&self) -> f64 {
        self.breakdown.empty().mass_kg
    }

    pub fn fuel_mass_kg(&self) -> f64 {
        self.breakdown.fuel.mass_kg
    }

    pub fn flight_range_nmi(&self) -> f64 {
        units::m_to_nmi(self.flight_range_m)
    }

    /// Fuel burned per passenger-nautical-mile over the full-fuel range (kg).
    pub fn fuel_per_pax_nmi_kg(&self) -> f64 {
        self.fuel_mass_kg() / (self.n_pax * self.flight_range_nmi())
    }

    /// Onboard fuel energy spread over passengers and range (MJ/pax-km).
    pub fn transport_energy_mj_per_pax_km(&self) -> f64 {
        self.fuel_mass_kg() * self.fuel.specific_energy_j_kg
            / (self.n_pax * self.flight_range_m)
            * 1e-3
    }

    pub fn lift_to_drag(&self) -> f64 {
        self.aero.lift_to_drag()
    }
}

/// Evaluate the complete sizing chain at one set of design-variable values.
pub fn build_design(
    config: &DesignConfig,
    values: &DesignValues,
    polars: &PolarSet,
) -> DesignPoint {
    let fuel = config.fuel_properties();
    let v = values;

    let cabin_radius_m = v.cabin_diameter_m / 2.0;
    let cabin_xsec_area_m2 = PI * cabin_radius_m.powi(2);
    let st = Stations::of(v);

    // Five fuselage segments: nose cap, fwd tank, cabin, aft tank, tail cone.
    let fuselage = Fuselage::from_segments(vec![
        fuselage::nose_segment(
            st.nose,
            st.nose_to_fwd_tank,
            cabin_radius_m,
            FUSELAGE_PROFILE_POINTS,
        ),
        fuselage::constant_segment(st.nose_to_fwd_tank, st.fwd_tank_to_cabin, cabin_radius_m),
        fuselage::constant_segment(st.fwd_tank_to_cabin, st.cabin_to_aft_tank, cabin_radius_m),
        fuselage::constant_segment(st.cabin_to_aft_tank, st.aft_tank_to_tail, cabin_radius_m),
        fuselage::tail_segment(
            st.aft_tank_to_tail,
            st.tail,
            cabin_radius_m,
            FUSELAGE_PROFILE_POINTS,
        ),
    ]);

    let wing = Surface::cranked_wing(&CrankedWingParams {
        span_m: v.wing_span_m,
        root_chord_m: v.wing_root_chord_m,
        le_sweep_deg: v.wing_le_sweep_deg,
        dihedral_deg: WING_DIHEDRAL_DEG,
        yehudi_span_fraction: WING_YEHUDI_SPAN_FRACTION,
        tip_chord_fraction: WING_TIP_CHORD_FRACTION,
        x_le_m: v.wing_x_le_m,
        z_le_m: -0.5 * cabin_radius_m,
    });
    let hstab = Surface::tapered(&TaperedSurfaceParams {
        span_m: v.hstab_span_m,
        root_chord_m: v.hstab_root_chord_m,
        le_sweep_deg: v.hstab_le_sweep_deg,
        taper_ratio: STAB_TAPER_RATIO,
        x_le_m: st.tail - 2.0 * v.hstab_root_chord_m,
        z_le_m: 0.5 * cabin_radius_m,
        vertical: false,
    });
    let vstab = Surface::tapered(&TaperedSurfaceParams {
        span_m: v.vstab_span_m,
        root_chord_m: v.vstab_root_chord_m,
        le_sweep_deg: v.vstab_le_sweep_deg,
        taper_ratio: STAB_TAPER_RATIO,
        x_le_m: st.tail - 2.0 * v.vstab_root_chord_m,
        z_le_m: cabin_radius_m,
        vertical: true,
    });

    let airplane = Airplane {
        fuselage,
        wing: LiftingSurface {
            surface: wing,
            airfoil: Airfoil::b737c(),
        },
        hstab: LiftingSurface {
            surface: hstab,
            airfoil: Airfoil::naca0012(),
        },
        vstab: LiftingSurface {
            surface: vstab,
            airfoil: Airfoil::naca0008(),
        },
        additional_cd: ADDITIONAL_CD,
    };
    let wing = &airplane.wing.surface;
    let hstab = &airplane.hstab.surface;
    let vstab = &airplane.vstab.surface;

    let reference = ReferenceEngine::ge9x();
    let thrust = size_thrust(
        v.design_togw_kg,
        N_ENGINES,
        THRUST_SIZING_LD,
        units::ftmin_to_ms(DESIGN_CLIMB_RATE_FT_MIN),
        units::kn_to_ms(DESIGN_V_CLIMB_KN),
    );
    let engine = Engine::scaled_from(&reference, thrust.climb_per_engine_n);
    let isp_s = reference.isp_for_fuel_s(fuel.specific_energy_j_kg);

    let yehudi_x_m =
        WING_YEHUDI_SPAN_FRACTION * (v.wing_span_m / 2.0) * v.wing_le_sweep_deg.to_radians().tan();
    let x_engines_m = v.wing_x_le_m + yehudi_x_m;

    // Level cruise; climb enters only through the thrust-sizing requirement.
    let op_point = OperatingPoint {
        altitude_m: v.altitude_m,
        mach: v.mach,
        alpha_deg: v.alpha_deg,
        flight_path_angle_deg: 0.0,
    };
    let cruise_atmosphere = op_point.atmosphere();
    let cabin_atmosphere = Atmosphere::at_altitude(units::ft_to_m(CABIN_PRESSURE_ALTITUDE_FT));

    let togw = v.design_togw_kg;
    let x_cabin_midpoint_m = st.cabin_midpoint();
    let x_wing_root_te_m = v.wing_x_le_m + v.wing_root_chord_m;

    let passengers = regressions::passengers(
        config.n_pax,
        x_cabin_midpoint_m,
        cabin_radius_m,
        v.cabin_length_m,
    );
    let seats = regressions::seats(
        passengers.mass_kg,
        x_cabin_midpoint_m,
        cabin_radius_m,
        v.cabin_length_m,
    );
    let apu = regressions::apu(
        passengers.mass_kg,
        x_cabin_midpoint_m,
        cabin_radius_m,
        v.cabin_length_m,
    );
    let payload_proportional = regressions::payload_proportional(
        passengers.mass_kg,
        x_cabin_midpoint_m,
        cabin_radius_m,
        v.cabin_length_m,
    );
    let buoyancy = regressions::buoyancy(
        cabin_atmosphere.density_kg_m3(),
        cruise_atmosphere.density_kg_m3(),
        cabin_xsec_area_m2,
        v.cabin_length_m,
        x_cabin_midpoint_m,
        cabin_radius_m,
    );

    let wing_mass = regressions::wing(
        togw,
        ULTIMATE_LOAD_FACTOR,
        wing.area_m2(),
        wing.aspect_ratio(),
        airplane.wing.airfoil.thickness_ratio,
        wing.taper_ratio(),
        wing.mean_sweep_deg(),
        wing.aerodynamic_center_x_m(),
        v.wing_span_m,
        v.wing_root_chord_m,
    );
    let wing_to_hstab_m = hstab.aerodynamic_center_x_m() - wing.aerodynamic_center_x_m();
    let hstab_mass = regressions::hstab(
        togw,
        ULTIMATE_LOAD_FACTOR,
        v.cabin_diameter_m,
        v.hstab_span_m,
        hstab.area_m2(),
        wing_to_hstab_m,
        hstab.mean_sweep_deg(),
        hstab.aspect_ratio(),
        hstab.aerodynamic_center_x_m(),
    );
    let wing_to_vstab_m = vstab.aerodynamic_center_x_m() - wing.aerodynamic_center_x_m();
    let vstab_mass = regressions::vstab(
        togw,
        ULTIMATE_LOAD_FACTOR,
        vstab.area_m2(),
        wing_to_vstab_m,
        vstab.mean_sweep_deg(),
        vstab.aspect_ratio(),
        airplane.vstab.airfoil.thickness_ratio,
        vstab.aerodynamic_center_x_m(),
    );

    let structural_length_m = st.structural_length();
    let k_ws = regressions::fuselage_k_ws(
        wing.taper_ratio(),
        v.wing_span_m,
        wing.mean_sweep_deg(),
        structural_length_m,
    );
    let fuselage_mass = regressions::fuselage(
        togw,
        ULTIMATE_LOAD_FACTOR,
        structural_length_m,
        airplane.fuselage.wetted_area_m2(),
        k_ws,
        x_cabin_midpoint_m,
        cabin_radius_m,
        v.cabin_length_m,
    );

    let engines = MassProperties::point_mass(N_ENGINES * engine.mass_kg, x_engines_m);
    let main_landing_gear = regressions::main_landing_gear(
        togw,
        ULTIMATE_LOAD_FACTOR,
        1.1 * engine.outer_diameter_m,
        x_wing_root_te_m,
    );
    let nose_landing_gear = regressions::nose_landing_gear(
        togw,
        ULTIMATE_LOAD_FACTOR,
        0.9 * engine.outer_diameter_m,
        st.nose_to_fwd_tank,
    );
    let nacelles = regressions::nacelles(
        N_ENGINES,
        engines.mass_kg,
        0.5 * engine.outer_diameter_m,
        0.2 * engine.outer_diameter_m,
        0.5 * engine.outer_diameter_m,
        ULTIMATE_LOAD_FACTOR,
    );
    let engine_controls = regressions::engine_controls(
        N_ENGINES,
        x_cabin_midpoint_m,
        (x_engines_m + st.nose) / 2.0,
    );
    let starter = regressions::starter(engines.mass_kg, x_engines_m);

    let control_surface_area_m2 = 0.15 * (wing.area_m2() + hstab.area_m2() + vstab.area_m2());
    let sizing_iyy_kg_m2 = togw * wing_to_hstab_m.powi(2);
    let flight_controls = regressions::flight_controls(
        control_surface_area_m2,
        sizing_iyy_kg_m2,
        0.5 * wing.aerodynamic_center_x_m()
            + 0.3 * hstab.aerodynamic_center_x_m()
            + 0.2 * vstab.aerodynamic_center_x_m(),
    );

    let instruments = regressions::instruments(
        N_ENGINES,
        v.cabin_length_m,
        v.wing_span_m,
        st.nose_to_fwd_tank,
    );
    let hydraulics = regressions::hydraulics(v.cabin_length_m, v.wing_span_m, x_wing_root_te_m);
    let electrical = regressions::electrical(v.cabin_length_m, N_ENGINES, x_engines_m);
    let avionics = regressions::avionics(st.nose_to_fwd_tank);
    let anti_ice = regressions::anti_ice(togw, wing.aerodynamic_center_x_m());
    let handling_gear = regressions::handling_gear(togw, x_cabin_midpoint_m);

    // Both tanks span the full cabin cross-section and share one length.
    let tank = FuelTank {
        exterior_radius_m: cabin_radius_m,
        length_m: v.fwd_tank_length_m,
        wall_thickness_m: fuel.tank_wall_thickness_m,
    };
    let tank_fuel_mass_kg = tank.fuel_mass_kg(fuel.density_kg_m3);
    let fuel_mass = MassProperties::point_mass(tank_fuel_mass_kg, st.fwd_tank_midpoint())
        + MassProperties::point_mass(tank_fuel_mass_kg, st.aft_tank_midpoint());
    let tanks = fuel_mass / fuel.tank_fuel_mass_fraction * (1.0 - fuel.tank_fuel_mass_fraction);

    let breakdown = MassBreakdown {
        passengers,
        seats,
        apu,
        payload_proportional,
        buoyancy,
        wing: wing_mass,
        hstab: hstab_mass,
        vstab: vstab_mass,
        fuselage: fuselage_mass,
        engines,
        main_landing_gear,
        nose_landing_gear,
        nacelles,
        engine_controls,
        starter,
        flight_controls,
        instruments,
        hydraulics,
        electrical,
        avionics,
        anti_ice,
        handling_gear,
        fuel: fuel_mass,
        tanks,
    };

    let aero = AeroBuildup {
        airplane: &airplane,
        op_point: &op_point,
        polars,
    }
    .run();

    let flight_range_m = op_point.true_airspeed_m_s()
        * aero.lift_to_drag()
        * isp_s
        * (breakdown.togw().mass_kg / breakdown.with_pax().mass_kg).ln();

    DesignPoint {
        values: *values,
        n_pax: config.n_pax,
        mission_range_m: config.mission_range_m(),
        fuel,
        airplane,
        engine,
        isp_s,
        breakdown,
        op_point,
        aero,
        flight_range_m,
    }
}
