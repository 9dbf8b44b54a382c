//! Output formatting and export for audit reports.
//!
//! Three serializations are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | JSON   | [`json`]   | Full-fidelity structured dump (every report field) |
//! | CSV    | [`csv`]    | Flattened table, one row per flagged page |
//! | Pretty | [`pretty`] | Colored terminal summary after a scan |
//!
//! [`write_reports`] persists JSON and/or CSV according to the selected
//! [`OutputFormat`]; the pretty summary is terminal-only and rendered
//! separately via [`pretty::format`].

pub mod csv;
pub mod json;
pub mod pretty;

use crate::error::AuditError;
use crate::report::Report;
use std::path::{Path, PathBuf};

/// File formats selectable with `--format`.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Full-fidelity JSON report.
    Json,
    /// Flattened CSV table of flagged pages.
    Csv,
    /// JSON to the output path plus CSV to the same path with a `.csv`
    /// extension.
    Both,
}

/// Writes the report to disk in the requested format(s).
///
/// `output` is the primary path. In `Both` mode it receives the JSON
/// document and the CSV path is derived from it by replacing the extension.
/// Returns the paths actually written, in write order.
///
/// # Errors
///
/// Returns [`AuditError::Export`] on the first file that fails to write.
pub fn write_reports(
    report: &Report,
    format: &OutputFormat,
    output: &Path,
) -> Result<Vec<PathBuf>, AuditError> {
    let mut written = Vec::new();

    match format {
        OutputFormat::Json => {
            write_file(output, &json::format(report))?;
            written.push(output.to_path_buf());
        }
        OutputFormat::Csv => {
            write_file(output, &csv::format(report))?;
            written.push(output.to_path_buf());
        }
        OutputFormat::Both => {
            write_file(output, &json::format(report))?;
            written.push(output.to_path_buf());

            let csv_path = output.with_extension("csv");
            write_file(&csv_path, &csv::format(report))?;
            written.push(csv_path);
        }
    }

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), AuditError> {
    std::fs::write(path, contents).map_err(|source| AuditError::Export {
        path: path.to_path_buf(),
        source,
    })
}
