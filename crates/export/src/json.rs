//! Pretty JSON export of a whole design result.

use std::io::Write;
use std::path::Path;

use lander_design::DesignResult;

use crate::{ExportError, writer_for_path};

pub fn to_string(result: &DesignResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write `result` to `path` (`-` for stdout).
pub fn write_result(path: &Path, result: &DesignResult) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
