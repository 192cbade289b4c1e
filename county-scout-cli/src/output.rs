//! Report output.

use std::io::Write;

use camino::Utf8Path;
use log::info;
use serde::Serialize;

use crate::{CliError, fs};

/// Write `report` as pretty JSON to `output`, or to `writer` when no path is
/// configured.
pub(crate) fn write_report<T: Serialize>(
    report: &T,
    output: Option<&Utf8Path>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    payload.push('\n');
    match output {
        Some(path) => {
            fs::ensure_parent_dir(path).map_err(|source| CliError::CreateOutputDirectory {
                path: path.to_path_buf(),
                source,
            })?;
            fs::write(path, payload.as_bytes()).map_err(CliError::WriteReport)?;
            info!("wrote report to {path}");
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteReport)?,
    }
    Ok(())
}
