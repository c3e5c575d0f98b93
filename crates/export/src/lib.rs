//! Export helpers for CSV and JSON artifacts.

pub mod summary {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "fuel,n_pax,mission_range_nmi,tank_fuel_mass_fraction,objective,status,feasible,max_constraint_violation,fwd_tank_length_m,design_togw_kg,computed_togw_kg,empty_mass_kg,fuel_mass_kg,mach,altitude_m,alpha_deg,lift_to_drag,flight_range_nmi,transport_energy_mj_per_pax_km";

    const COVERAGE_HEADER: &str = "fuel,design_range_nmi,range_nmi,transport_energy_mj_per_pax_km";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard design-summary CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Write the off-design coverage CSV header.
    pub fn write_coverage_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", COVERAGE_HEADER)
    }

    /// CSV row emitted for one solved design.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub fuel: &'a str,
        pub n_pax: f64,
        pub mission_range_nmi: f64,
        pub tank_fuel_mass_fraction: f64,
        pub objective: &'a str,
        pub status: &'a str,
        pub feasible: bool,
        pub max_constraint_violation: f64,
        pub fwd_tank_length_m: f64,
        pub design_togw_kg: f64,
        pub computed_togw_kg: f64,
        pub empty_mass_kg: f64,
        pub fuel_mass_kg: f64,
        pub mach: f64,
        pub altitude_m: f64,
        pub alpha_deg: f64,
        pub lift_to_drag: f64,
        pub flight_range_nmi: f64,
        pub transport_energy_mj_per_pax_km: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{:.6},{},{},{},{:.3e},{:.4},{:.1},{:.1},{:.1},{:.1},{:.4},{:.1},{:.4},{:.4},{:.1},{:.4}",
                self.fuel,
                self.n_pax,
                self.mission_range_nmi,
                self.tank_fuel_mass_fraction,
                self.objective,
                self.status,
                if self.feasible { "true" } else { "false" },
                self.max_constraint_violation,
                self.fwd_tank_length_m,
                self.design_togw_kg,
                self.computed_togw_kg,
                self.empty_mass_kg,
                self.fuel_mass_kg,
                self.mach,
                self.altitude_m,
                self.alpha_deg,
                self.lift_to_drag,
                self.flight_range_nmi,
                self.transport_energy_mj_per_pax_km,
            )
        }
    }

    /// CSV row for one point of an off-design coverage curve.
    #[derive(Debug, Clone)]
    pub struct CoverageRecord<'a> {
        pub fuel: &'a str,
        pub design_range_nmi: f64,
        pub range_nmi: f64,
        pub transport_energy_mj_per_pax_km: f64,
    }

    impl<'a> CoverageRecord<'a> {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.2},{:.5}",
                self.fuel,
                self.design_range_nmi,
                self.range_nmi,
                self.transport_energy_mj_per_pax_km,
            )
        }
    }
}

pub mod breakdown {
    use lh2_mass::{MassBreakdown, Subsystem};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Metadata describing the solved design a breakdown belongs to.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub fuel: &'a str,
        pub n_pax: f64,
        pub mission_range_nmi: f64,
        pub status: &'a str,
        pub feasible: bool,
    }

    #[derive(Serialize)]
    struct BreakdownSidecar<'a> {
        fuel: &'a str,
        n_pax: f64,
        mission_range_nmi: f64,
        status: &'a str,
        feasible: bool,
        togw_kg: f64,
        empty_mass_kg: f64,
        subsystems: Vec<Entry>,
    }

    #[derive(Serialize)]
    struct Entry {
        name: &'static str,
        mass_kg: f64,
        x_cg_m: f64,
    }

    /// Write the per-subsystem mass budget as a JSON sidecar.
    pub fn write_sidecar(
        output: &Path,
        meta: &Metadata<'_>,
        breakdown: &MassBreakdown,
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let subsystems = Subsystem::ALL
            .iter()
            .map(|&subsystem| {
                let props = breakdown.get(subsystem);
                Entry {
                    name: subsystem.key(),
                    mass_kg: props.mass_kg,
                    x_cg_m: props.x_cg_m,
                }
            })
            .collect();

        let sidecar = BreakdownSidecar {
            fuel: meta.fuel,
            n_pax: meta.n_pax,
            mission_range_nmi: meta.mission_range_nmi,
            status: meta.status,
            feasible: meta.feasible,
            togw_kg: breakdown.togw().mass_kg,
            empty_mass_kg: breakdown.empty().mass_kg,
            subsystems,
        };

        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}
