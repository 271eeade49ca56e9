//! Raw CSV table reading with header and cell normalization.

use std::path::Path;

use csv::ReaderBuilder;

use shelfwatch_model::{Result, ShelfwatchError};

/// A whole-file snapshot of the source: normalized headers plus rows
/// padded to the header width.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Trims surrounding whitespace, strips the BOM, and collapses embedded
/// line breaks so header formatting differences do not break field
/// resolution.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn unavailable(path: &Path, reason: impl ToString) -> ShelfwatchError {
    ShelfwatchError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Reads the source wholesale. The first non-blank row is the header row;
/// fully blank rows are dropped. Any read fault maps to
/// [`ShelfwatchError::SourceUnavailable`].
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| unavailable(path, error))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| unavailable(path, error))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers: Vec<String> = raw_rows[0]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}
