use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn market_chart_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("coverage.csv");
    let png_path = dir.path().join("coverage.png");

    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(
        file,
        "fuel,design_range_nmi,range_nmi,transport_energy_mj_per_pax_km"
    )
    .unwrap();
    for (fuel, design_range) in [
        ("hydrogen", 3750.0),
        ("hydrogen", 7500.0),
        ("Jet A", 3750.0),
        ("Jet A", 7500.0),
    ] {
        for i in 0..6 {
            let range_nmi = design_range * (0.1 + 0.3 * i as f64);
            let te = 0.7 + 0.1 * i as f64;
            writeln!(file, "{fuel},{design_range},{range_nmi:.2},{te:.5}").unwrap();
        }
    }

    let output = Command::cargo_bin("market_chart")
        .expect("market_chart bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--design-ranges-nmi",
            "3750,7500",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");
    assert!(
        stdout.contains("Chart written to"),
        "missing confirmation line. Output:\n{}",
        stdout
    );

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn market_chart_rejects_unmatched_design_ranges() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("coverage.csv");

    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(
        file,
        "fuel,design_range_nmi,range_nmi,transport_energy_mj_per_pax_km"
    )
    .unwrap();
    writeln!(file, "hydrogen,7500,7500.00,0.90000").unwrap();

    Command::cargo_bin("market_chart")
        .expect("market_chart bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            dir.path().join("unused.png").to_str().unwrap(),
            "--design-ranges-nmi",
            "5000",
        ])
        .assert()
        .failure();
}

#[test]
fn line_losses_reports_both_phases() {
    let output = Command::cargo_bin("line_losses")
        .expect("line_losses bin")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");

    for needle in [
        "=== Liquid hydrogen ===",
        "=== Gaseous hydrogen ===",
        "Fanno choking length",
        "Pressure loss",
    ] {
        assert!(
            stdout.contains(needle),
            "missing '{}'. Output:\n{}",
            needle,
            stdout
        );
    }
}

#[test]
fn network_energy_reports_electrical_demand() {
    let output = Command::cargo_bin("network_energy")
        .expect("network_energy bin")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");

    for needle in [
        "Fuel demand",
        "Supply-chain loss fraction",
        "TWh/day",
        "Mean electrical power",
    ] {
        assert!(
            stdout.contains(needle),
            "missing '{}'. Output:\n{}",
            needle,
            stdout
        );
    }
}

#[test]
fn design_point_emits_report_summary_and_breakdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary_path = dir.path().join("design_point.csv");
    let breakdown_path = dir.path().join("mass_breakdown.json");

    let output = Command::cargo_bin("design_point")
        .expect("design_point bin")
        .args([
            "--no-figures",
            "--cache-dir",
            dir.path().join("cache").to_str().unwrap(),
            "--summary",
            summary_path.to_str().unwrap(),
            "--breakdown",
            breakdown_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");
    for needle in ["OUTPUTS", "KEY DESIGN VARIABLES", "MASS PROPS"] {
        assert!(
            stdout.contains(needle),
            "missing report section '{}'. Output:\n{}",
            needle,
            stdout
        );
    }

    let summary = fs::read_to_string(&summary_path).expect("summary csv");
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2, "header plus one design row:\n{}", summary);
    assert_eq!(lines[0].split(',').count(), 19);
    assert_eq!(lines[1].split(',').count(), 19);
    assert!(lines[1].starts_with("hydrogen,400,7500,"));

    let sidecar: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&breakdown_path).expect("sidecar json"))
            .expect("sidecar parses");
    assert_eq!(sidecar["fuel"], "hydrogen");
    assert_eq!(
        sidecar["subsystems"]
            .as_array()
            .expect("subsystems array")
            .len(),
        24
    );
    assert!(sidecar["togw_kg"].as_f64().expect("togw") > 0.0);
}
