//! Export batch results to CSV or JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream scripts;
//! failed rows keep their inputs and carry the error message instead of a value.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::BatchRow;
use crate::error::{AppError, EXIT_IO};

/// Write batch rows to a CSV file.
pub fn write_results_csv(path: &Path, rows: &[BatchRow]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_csv(&mut file, rows)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV: {e}")))
}

fn write_csv<W: Write>(out: &mut W, rows: &[BatchRow]) -> std::io::Result<()> {
    writeln!(out, "line,x,y,z,value,error")?;
    for r in rows {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            r.line,
            r.request.x,
            r.request.y,
            r.request.z,
            r.value.map(|v| format!("{v:.10}")).unwrap_or_default(),
            r.error.as_deref().map(quote).unwrap_or_default(),
        )?;
    }
    Ok(())
}

/// Render batch rows as pretty JSON.
pub fn results_json(rows: &[BatchRow]) -> Result<String, AppError> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to serialize results: {e}")))
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
