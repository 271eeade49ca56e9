//! Check/export pipeline stages shared by the CLI commands and tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use shelfwatch_ingest::{load_dataset, load_dataset_or_empty};
use shelfwatch_model::{AlertPolicy, Dataset, FieldId, FieldMap, FillStyle, Severity};
use shelfwatch_report::{Classified, ClassifiedRow, ExportSchema, classify, export_csv};

pub struct CheckOptions {
    pub reference: NaiveDate,
    pub policy: AlertPolicy,
    pub search: Option<String>,
}

/// One urgent notice, most urgent first.
pub struct AlertLine {
    pub severity: Severity,
    pub message: String,
}

/// One row of the full listing, ready for table rendering.
pub struct ListingRow {
    /// Source cells in column order.
    pub cells: Vec<String>,
    pub remaining: String,
    pub status: String,
    pub fill: FillStyle,
}

pub struct CheckReport {
    pub source: PathBuf,
    pub reference: NaiveDate,
    pub columns: Vec<String>,
    pub alerts: Vec<AlertLine>,
    pub listing: Vec<ListingRow>,
    pub total_records: usize,
    pub unknown_dates: usize,
    pub expired: usize,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn has_expired(&self) -> bool {
        self.expired > 0
    }
}

/// Loads, classifies, and shapes one check run.
///
/// Load failures degrade per the error taxonomy: an unavailable source or
/// unresolvable required column yields an empty listing plus a recorded
/// error, never a crash.
pub fn run_check(source: &Path, map: &FieldMap, options: &CheckOptions) -> CheckReport {
    let span = info_span!("check", source = %source.display(), reference = %options.reference);
    let _guard = span.enter();

    let mut errors = Vec::new();
    let dataset = match load_dataset_or_empty(source, map) {
        Ok(dataset) => dataset,
        Err(error) => {
            errors.push(error.to_string());
            Dataset::empty()
        }
    };

    let classified = classify(&dataset, options.reference, &options.policy);
    let alerts = build_alerts(&classified);
    let term = options.search.as_deref().unwrap_or("");
    let listing = classified
        .search(term)
        .into_iter()
        .map(|row| listing_row(&classified, row))
        .collect();
    let expired = classified.by_severity(Severity::Expired).len();
    let unknown_dates = classified
        .rows
        .iter()
        .filter(|row| row.remaining_days.is_none())
        .count();
    info!(
        records = dataset.len(),
        alerts = alerts.len(),
        expired,
        unknown_dates,
        "check complete"
    );

    CheckReport {
        source: source.to_path_buf(),
        reference: options.reference,
        columns: dataset.columns.clone(),
        alerts,
        listing,
        total_records: dataset.len(),
        unknown_dates,
        expired,
        errors,
    }
}

fn build_alerts(classified: &Classified<'_>) -> Vec<AlertLine> {
    let mut alerts = Vec::new();
    for row in &classified.rows {
        let (Some(days), Some(severity)) = (row.remaining_days, row.severity) else {
            continue;
        };
        let record = classified.record(row);
        let name = classified.dataset.field_text(record, FieldId::Name);
        let kind = classified.dataset.field_text(record, FieldId::Kind);
        let message = match severity {
            Severity::Expired => {
                format!("[DISPOSE] '{name}' ({kind}) - expired {} days ago", -days)
            }
            Severity::Imminent => {
                format!("[IMMINENT] '{name}' ({kind}) - exactly {days} days left")
            }
            Severity::Attention => format!("[WATCH] '{name}' ({kind}) - {days} days left"),
            Severity::Safe => continue,
        };
        alerts.push(AlertLine { severity, message });
    }
    alerts
}

fn listing_row(classified: &Classified<'_>, row: &ClassifiedRow) -> ListingRow {
    let record = classified.record(row);
    let cells = (0..classified.dataset.columns.len())
        .map(|index| record.cell(index).as_str().to_string())
        .collect();
    ListingRow {
        cells,
        remaining: row.remaining_label(),
        status: row
            .severity
            .map(|severity| severity.label().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        fill: row.fill,
    }
}

pub struct ExportRequest<'a> {
    pub source: &'a Path,
    pub destination: &'a Path,
    pub map: &'a FieldMap,
    pub reference: NaiveDate,
    pub policy: AlertPolicy,
    pub schema: ExportSchema,
}

#[derive(Debug)]
pub struct ExportReport {
    pub destination: PathBuf,
    pub rows: usize,
    pub expired_fills: usize,
    pub attention_fills: usize,
}

/// Loads, classifies, and writes the colored export. Unlike `run_check`,
/// load failures here are hard errors: an export with silently missing
/// data would be worse than no export.
pub fn run_export(request: &ExportRequest<'_>) -> Result<ExportReport> {
    let span = info_span!("export", source = %request.source.display());
    let _guard = span.enter();

    let dataset = load_dataset(request.source, request.map)
        .with_context(|| format!("load {}", request.source.display()))?;
    let classified = classify(&dataset, request.reference, &request.policy);
    let outcome = export_csv(&classified, &request.schema, request.destination)
        .with_context(|| format!("write {}", request.destination.display()))?;

    let expired_fills = outcome
        .fills
        .iter()
        .filter(|fill| **fill == FillStyle::Expired)
        .count();
    let attention_fills = outcome
        .fills
        .iter()
        .filter(|fill| **fill == FillStyle::Attention)
        .count();
    Ok(ExportReport {
        destination: outcome.path,
        rows: outcome.rows,
        expired_fills,
        attention_fills,
    })
}
