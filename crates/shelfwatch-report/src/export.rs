//! Colored re-export of the classified dataset.
//!
//! The export collaborator applies row fills to the written file; the
//! remaining-days column it colors by is named through an explicit
//! [`ExportSchema`] contract instead of a runtime header search.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use shelfwatch_model::{FillStyle, Result, ShelfwatchError};

use crate::classify::Classified;

/// Contract between classifier and exporter: where the derived
/// remaining-days values land in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSchema {
    /// Header of the appended remaining-days column. Must match whatever
    /// header the colorizing collaborator looks up.
    pub remaining_days_header: String,
}

impl Default for ExportSchema {
    /// Header used by the original inventory sheets for the derived column.
    fn default() -> Self {
        Self {
            remaining_days_header: "남은일수".to_string(),
        }
    }
}

/// What the export wrote: the destination, the row count, and the fill
/// plan row-aligned with the written data rows.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows: usize,
    pub fills: Vec<FillStyle>,
}

/// Writes the full classified listing to a new CSV in established order:
/// every source column plus the remaining-days column named by `schema`.
/// Unknown-date rows get an empty remaining-days cell.
///
/// # Errors
///
/// [`ShelfwatchError::Schema`] when the remaining-days header collides
/// with a source column (a contract violation, not a user condition);
/// [`ShelfwatchError::WriteFailed`] when the destination cannot be
/// written.
pub fn export_csv(
    classified: &Classified<'_>,
    schema: &ExportSchema,
    path: &Path,
) -> Result<ExportOutcome> {
    let dataset = classified.dataset;
    if dataset
        .columns
        .iter()
        .any(|column| column == &schema.remaining_days_header)
    {
        return Err(ShelfwatchError::Schema(format!(
            "remaining-days header `{}` collides with a source column",
            schema.remaining_days_header
        )));
    }

    let write_failed = |error: csv::Error| ShelfwatchError::WriteFailed {
        path: path.to_path_buf(),
        reason: error.to_string(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_failed)?;
    let mut header: Vec<&str> = dataset.columns.iter().map(String::as_str).collect();
    header.push(&schema.remaining_days_header);
    writer.write_record(&header).map_err(write_failed)?;

    for row in &classified.rows {
        let record = classified.record(row);
        let mut out: Vec<String> = (0..dataset.columns.len())
            .map(|index| record.cell(index).as_str().to_string())
            .collect();
        out.push(
            row.remaining_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
        );
        writer.write_record(&out).map_err(write_failed)?;
    }
    writer.flush().map_err(|error| ShelfwatchError::WriteFailed {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;

    info!(
        destination = %path.display(),
        rows = classified.rows.len(),
        "export written"
    );
    Ok(ExportOutcome {
        path: path.to_path_buf(),
        rows: classified.rows.len(),
        fills: classified.fill_plan(),
    })
}
