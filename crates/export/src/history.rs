//! Per-pass CSV export of the iteration history.

use std::io::Write;

use lander_design::DesignState;

use crate::ExportError;

/// Column order matches the field order of [`DesignState`].
pub const HEADER: [&str; 13] = [
    "iteration",
    "total_mass_kg",
    "payload_kg",
    "dry_mass_kg",
    "propellant_kg",
    "inert_mass_kg",
    "statistical_dry_kg",
    "structure_kg",
    "landing_gear_kg",
    "engines_kg",
    "tanks_kg",
    "subsystems_kg",
    "delta_kg",
];

/// Write the header followed by one row per pass.
pub fn write_csv<W: Write>(writer: W, history: &[DesignState]) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for state in history {
        csv.serialize(state)?;
    }
    csv.flush()?;
    Ok(())
}
