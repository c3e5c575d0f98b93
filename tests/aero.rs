use std::fs;

use lh2_aero::{
    Airfoil, AeroBuildup, Airplane, LiftingSurface, OperatingPoint, PolarCacheError, PolarSet,
};
use lh2_aero::buildup::{finite_wing_lift_slope_per_rad, flat_plate_cf, oswald_span_efficiency};
use lh2_core::units;
use lh2_geometry::fuselage::{Fuselage, constant_segment, nose_segment, tail_segment};
use lh2_geometry::surface::{CrankedWingParams, Surface, TaperedSurfaceParams};

#[test]
fn polar_cache_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let airfoil = Airfoil::b737c();

    let generated = airfoil.polar(dir.path()).expect("first polar load");
    assert!(dir.path().join("b737c.json").exists());
    assert_eq!(generated.alpha_deg.len(), 50);

    let reloaded = airfoil.polar(dir.path()).expect("cached polar load");
    assert_eq!(generated, reloaded);
}

#[test]
fn polar_cache_rejects_a_file_for_the_wrong_airfoil() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wrong = Airfoil::naca0012().generate_polar();
    let json = serde_json::to_string(&wrong).expect("serialize polar");
    fs::write(dir.path().join("b737c.json"), json).expect("write impostor");

    let err = Airfoil::b737c().polar(dir.path()).unwrap_err();
    assert!(
        matches!(err, PolarCacheError::NameMismatch { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn polar_interpolation_clamps_outside_the_sweep() {
    let polar = Airfoil::b737c().generate_polar();

    assert_eq!(polar.cl_at(-90.0), polar.cl[0]);
    assert_eq!(polar.cl_at(90.0), *polar.cl.last().unwrap());
    // The supercritical section stalls inside the sweep.
    assert!((polar.cl_at(90.0) - 1.7).abs() < 1e-9);
    // Cambered section lifts at zero alpha.
    assert!(polar.cl_at(0.0) > 0.2);
    assert!(polar.cd_at(0.0) > 0.0);
    // The drag bucket centers on the zero-alpha lift.
    assert!(polar.profile_cd_rise_at(0.0) < 1e-6);
    assert!(polar.profile_cd_rise_at(10.0) > 1e-3);
}

#[test]
fn section_model_pins_zero_lift_and_stall() {
    let wing = Airfoil::b737c();
    assert!(wing.section_cl(wing.zero_lift_alpha_deg).abs() < 1e-12);
    assert_eq!(wing.section_cl(60.0), wing.cl_max);
    assert_eq!(wing.section_cl(-60.0), -wing.cl_max);
    // Bucket floor: cd_min = 0.0040 + 0.02 t/c.
    let cl_bucket = wing.section_cl(0.0);
    assert!((wing.section_cd(cl_bucket) - 0.00652).abs() < 1e-9);

    let symmetric = Airfoil::naca0012();
    assert!(symmetric.section_cl(0.0).abs() < 1e-12);
    assert!((symmetric.section_cl(2.0) + symmetric.section_cl(-2.0)).abs() < 1e-12);
}

#[test]
fn handbook_fits_stay_in_physical_ranges() {
    // DATCOM slope: below the 2D limit, growing with compressibility.
    let incompressible = finite_wing_lift_slope_per_rad(10.0, 0.0, 0.0);
    assert!(incompressible > 4.5 && incompressible < std::f64::consts::TAU);
    assert!(finite_wing_lift_slope_per_rad(10.0, 0.8, 0.0) > incompressible);

    // Oswald fits: both branches bounded by one.
    let straight = oswald_span_efficiency(9.0, 0.0);
    assert!(straight > 0.7 && straight < 0.85, "straight-wing e: {straight}");
    let swept = oswald_span_efficiency(9.0, 35.0);
    assert!(swept > 0.3 && swept < 0.7, "swept-wing e: {swept}");

    // Skin friction: decays with Reynolds number and with Mach.
    let cf = flat_plate_cf(1.0e7, 0.0);
    assert!(cf > 0.0029 && cf < 0.0031, "flat-plate cf: {cf}");
    assert!(flat_plate_cf(1.0e8, 0.0) < cf);
    assert!(flat_plate_cf(1.0e7, 0.82) < cf);
}

#[test]
fn operating_point_state_follows_the_atmosphere() {
    let op = OperatingPoint {
        altitude_m: units::ft_to_m(35_000.0),
        mach: 0.82,
        alpha_deg: 2.0,
        flight_path_angle_deg: 0.0,
    };
    assert!((op.true_airspeed_m_s() - 243.2).abs() < 0.5);
    assert!(
        (op.dynamic_pressure_pa() - 11_220.0).abs() < 30.0,
        "cruise dynamic pressure: {}",
        op.dynamic_pressure_pa()
    );
    assert!((op.weight_support_fraction() - 1.0).abs() < 1e-12);
    let climbing = OperatingPoint {
        flight_path_angle_deg: 3.0,
        ..op
    };
    assert!(climbing.weight_support_fraction() < 1.0);
}

#[test]
fn buildup_produces_transport_like_forces_at_cruise() {
    let dir = tempfile::tempdir().expect("tempdir");
    let airplane = test_airplane();
    let polars = PolarSet::load(
        &Airfoil::b737c(),
        &Airfoil::naca0012(),
        &Airfoil::naca0008(),
        dir.path(),
    )
    .expect("polar set");

    let cruise = OperatingPoint {
        altitude_m: units::ft_to_m(35_000.0),
        mach: 0.82,
        alpha_deg: 2.0,
        flight_path_angle_deg: 0.0,
    };
    let forces = AeroBuildup {
        airplane: &airplane,
        op_point: &cruise,
        polars: &polars,
    }
    .run();

    assert!(forces.lift_n > 0.0);
    assert!(forces.drag_n > 0.0);
    assert!(
        forces.cl > 0.2 && forces.cl < 1.0,
        "cruise lift coefficient: {}",
        forces.cl
    );
    assert!(
        forces.cd > 0.01 && forces.cd < 0.08,
        "cruise drag coefficient: {}",
        forces.cd
    );
    let ld = forces.lift_to_drag();
    assert!(ld > 5.0 && ld < 40.0, "cruise L/D: {ld}");
    assert!((ld - forces.lift_n / forces.drag_n).abs() < 1e-9);

    // More alpha, more lift; more lift, more induced drag.
    let higher = AeroBuildup {
        airplane: &airplane,
        op_point: &OperatingPoint {
            alpha_deg: 4.0,
            ..cruise
        },
        polars: &polars,
    }
    .run();
    assert!(higher.lift_n > forces.lift_n);
    assert!(higher.cd > forces.cd);
}

/// A B777-like layout with round numbers, enough for the buildup to chew on.
fn test_airplane() -> Airplane {
    let fuselage = Fuselage::from_segments(vec![
        nose_segment(0.0, 5.0, 2.0, 10),
        constant_segment(5.0, 45.0, 2.0),
        tail_segment(45.0, 55.0, 2.0, 10),
    ]);
    let wing = Surface::cranked_wing(&CrankedWingParams {
        span_m: 60.0,
        root_chord_m: 12.0,
        le_sweep_deg: 32.0,
        dihedral_deg: 6.0,
        yehudi_span_fraction: 0.25,
        tip_chord_fraction: 0.15,
        x_le_m: 20.0,
        z_le_m: -1.5,
    });
    let hstab = Surface::tapered(&TaperedSurfaceParams {
        span_m: 20.0,
        root_chord_m: 5.0,
        le_sweep_deg: 30.0,
        taper_ratio: 0.35,
        x_le_m: 48.0,
        z_le_m: 0.5,
        vertical: false,
    });
    let vstab = Surface::tapered(&TaperedSurfaceParams {
        span_m: 9.0,
        root_chord_m: 5.0,
        le_sweep_deg: 40.0,
        taper_ratio: 0.35,
        x_le_m: 46.0,
        z_le_m: 2.0,
        vertical: true,
    });
    Airplane {
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
        additional_cd: 0.0060,
    }
}
