use std::fs;

use lh2_export::breakdown::{Metadata, write_sidecar};
use lh2_export::summary::{
    CoverageRecord, Record, write_coverage_header, write_header, writer_for_path,
};
use lh2_mass::{MassBreakdown, MassProperties};

#[test]
fn summary_row_matches_the_header_column_count() {
    let mut header = Vec::new();
    write_header(&mut header).expect("header");
    let header = String::from_utf8(header).expect("utf8");
    let columns: Vec<&str> = header.trim_end().split(',').collect();
    assert_eq!(columns.len(), 19);
    assert_eq!(columns[0], "fuel");
    assert_eq!(columns[8], "fwd_tank_length_m");
    assert_eq!(*columns.last().unwrap(), "transport_energy_mj_per_pax_km");

    let mut row = Vec::new();
    sample_record().write_to(&mut row).expect("row");
    let row = String::from_utf8(row).expect("utf8");
    assert_eq!(row.trim_end().split(',').count(), columns.len());
}

#[test]
fn summary_row_formats_fields_as_expected() {
    let mut row = Vec::new();
    sample_record().write_to(&mut row).expect("row");
    let row = String::from_utf8(row).expect("utf8");
    assert_eq!(
        row,
        "hydrogen,400,7500,0.737463,fwd_tank_length,FtolReached,true,4.200e-5,6.3000,299370.0,299012.5,154321.0,48000.2,0.8200,10668.0,2.3456,17.8200,7512.3,0.9042\n"
    );
}

#[test]
fn coverage_row_uses_the_compact_format() {
    let mut out = Vec::new();
    write_coverage_header(&mut out).expect("header");
    CoverageRecord {
        fuel: "Jet A",
        design_range_nmi: 3_750.0,
        range_nmi: 1_234.567,
        transport_energy_mj_per_pax_km: 1.23456789,
    }
    .write_to(&mut out)
    .expect("row");

    let text = String::from_utf8(out).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "fuel,design_range_nmi,range_nmi,transport_energy_mj_per_pax_km"
    );
    assert_eq!(lines.next().unwrap(), "Jet A,3750,1234.57,1.23457");
}

#[test]
fn path_writer_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("artifacts").join("deep").join("out.csv");

    let mut writer = writer_for_path(&nested).expect("writer");
    write_header(writer.as_mut()).expect("header");
    writer.flush().expect("flush");
    drop(writer);

    let written = fs::read_to_string(&nested).expect("read back");
    assert!(written.starts_with("fuel,"));
}

#[test]
fn breakdown_sidecar_serializes_every_subsystem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mass_breakdown.json");
    let breakdown = sample_breakdown();

    write_sidecar(
        &path,
        &Metadata {
            fuel: "hydrogen",
            n_pax: 400.0,
            mission_range_nmi: 7_500.0,
            status: "FtolReached",
            feasible: true,
        },
        &breakdown,
    )
    .expect("sidecar");

    let text = fs::read_to_string(&path).expect("read sidecar");
    let json: serde_json::Value = serde_json::from_str(&text).expect("parse sidecar");

    assert_eq!(json["fuel"], "hydrogen");
    assert_eq!(json["feasible"], true);
    assert!((json["togw_kg"].as_f64().unwrap() - breakdown.togw().mass_kg).abs() < 1e-9);
    assert!(
        (json["empty_mass_kg"].as_f64().unwrap() - breakdown.empty().mass_kg).abs() < 1e-9
    );

    let subsystems = json["subsystems"].as_array().expect("subsystem array");
    assert_eq!(subsystems.len(), 24);
    let names: Vec<&str> = subsystems
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"payload_proportional_weights"));
    assert!(names.contains(&"anti-ice"));
    assert!(names.contains(&"fuel"));

    let wing = subsystems
        .iter()
        .find(|entry| entry["name"] == "wing")
        .expect("wing entry");
    assert!((wing["mass_kg"].as_f64().unwrap() - 6.0).abs() < 1e-9);
    assert!((wing["x_cg_m"].as_f64().unwrap() - 2.0).abs() < 1e-9);
}

fn sample_record() -> Record<'static> {
    Record {
        fuel: "hydrogen",
        n_pax: 400.0,
        mission_range_nmi: 7_500.0,
        tank_fuel_mass_fraction: 0.7374631,
        objective: "fwd_tank_length",
        status: "FtolReached",
        feasible: true,
        max_constraint_violation: 4.2e-5,
        fwd_tank_length_m: 6.3,
        design_togw_kg: 299_370.0,
        computed_togw_kg: 299_012.46,
        empty_mass_kg: 154_321.04,
        fuel_mass_kg: 48_000.2,
        mach: 0.82,
        altitude_m: 10_668.0,
        alpha_deg: 2.3456,
        lift_to_drag: 17.82,
        flight_range_nmi: 7_512.33,
        transport_energy_mj_per_pax_km: 0.90418,
    }
}

/// Subsystem masses 1..=24 kg in declaration order, all at x = 2 m.
fn sample_breakdown() -> MassBreakdown {
    let entry = |mass: f64| MassProperties::point_mass(mass, 2.0);
    MassBreakdown {
        passengers: entry(1.0),
        seats: entry(2.0),
        apu: entry(3.0),
        payload_proportional: entry(4.0),
        buoyancy: entry(5.0),
        wing: entry(6.0),
        hstab: entry(7.0),
        vstab: entry(8.0),
        fuselage: entry(9.0),
        engines: entry(10.0),
        main_landing_gear: entry(11.0),
        nose_landing_gear: entry(12.0),
        nacelles: entry(13.0),
        engine_controls: entry(14.0),
        starter: entry(15.0),
        flight_controls: entry(16.0),
        instruments: entry(17.0),
        hydraulics: entry(18.0),
        electrical: entry(19.0),
        avionics: entry(20.0),
        anti_ice: entry(21.0),
        handling_gear: entry(22.0),
        fuel: entry(23.0),
        tanks: entry(24.0),
    }
}
