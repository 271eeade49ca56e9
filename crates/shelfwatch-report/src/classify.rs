//! Remaining-days computation and severity bucketing.
//!
//! A classification run is a pure computation over one dataset snapshot
//! and one reference date. Records are never mutated; annotations live in
//! [`ClassifiedRow`] and are recomputed on every run.

use chrono::NaiveDate;
use tracing::debug;

use shelfwatch_model::{AlertPolicy, Dataset, FillStyle, ReagentRecord, Severity};

/// Calendar-day difference between expiry and reference.
///
/// Today-expiring items yield 0: the "+1 / today counts as day one"
/// convention seen in some revisions of the source spreadsheets is
/// deliberately not adopted. The reference date is a pure calendar date,
/// so two runs within the same day always agree.
pub fn remaining_days(expiry: NaiveDate, reference: NaiveDate) -> i64 {
    expiry.signed_duration_since(reference).num_days()
}

/// One annotated row of the classified listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRow {
    /// Index into the dataset's record sequence (input order).
    pub record: usize,
    /// `None` when the record carries no parsable expiry date.
    pub remaining_days: Option<i64>,
    /// `None` for unknown-date records: they are excluded from the
    /// urgency pipeline, never bucketed as `Expired` or `Safe`.
    pub severity: Option<Severity>,
    pub fill: FillStyle,
}

impl ClassifiedRow {
    /// Display text for the remaining-days value.
    pub fn remaining_label(&self) -> String {
        match self.remaining_days {
            Some(days) => days.to_string(),
            None => "unknown".to_string(),
        }
    }
}

/// The full classified listing: every record annotated and ordered by
/// urgency, unknown-date records last in input order.
#[derive(Debug, Clone)]
pub struct Classified<'a> {
    pub dataset: &'a Dataset,
    pub reference: NaiveDate,
    pub policy: AlertPolicy,
    pub rows: Vec<ClassifiedRow>,
}

/// Annotates and orders a dataset snapshot.
///
/// Sort key is remaining days ascending (most urgent first); ties keep
/// stable input order. Rows without a parsable date sort after every
/// dated row.
pub fn classify<'a>(
    dataset: &'a Dataset,
    reference: NaiveDate,
    policy: &AlertPolicy,
) -> Classified<'a> {
    let mut rows: Vec<ClassifiedRow> = dataset
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| classify_record(index, record, reference, policy))
        .collect();
    rows.sort_by_key(|row| match row.remaining_days {
        Some(days) => (0, days),
        None => (1, 0),
    });
    debug!(
        records = rows.len(),
        reference = %reference,
        "classification complete"
    );
    Classified {
        dataset,
        reference,
        policy: policy.clone(),
        rows,
    }
}

fn classify_record(
    index: usize,
    record: &ReagentRecord,
    reference: NaiveDate,
    policy: &AlertPolicy,
) -> ClassifiedRow {
    let remaining = record.expiry.map(|expiry| remaining_days(expiry, reference));
    let severity = remaining.map(|days| policy.classify(days));
    ClassifiedRow {
        record: index,
        remaining_days: remaining,
        severity,
        fill: severity.map(Severity::fill).unwrap_or_default(),
    }
}

impl Classified<'_> {
    /// Urgent sub-sequence: every dated row at or below the attention
    /// window, in established order. Unknown-date rows never appear here.
    pub fn attention_subset(&self) -> Vec<&ClassifiedRow> {
        self.rows
            .iter()
            .filter(|row| {
                row.remaining_days
                    .is_some_and(|days| days <= self.policy.attention_window)
            })
            .collect()
    }

    /// Rows in one severity bucket, in established order.
    pub fn by_severity(&self, severity: Severity) -> Vec<&ClassifiedRow> {
        self.rows
            .iter()
            .filter(|row| row.severity == Some(severity))
            .collect()
    }

    /// Per-row fill decisions in established order, usable by both the
    /// interactive display and the export path.
    pub fn fill_plan(&self) -> Vec<FillStyle> {
        self.rows.iter().map(|row| row.fill).collect()
    }

    pub fn record(&self, row: &ClassifiedRow) -> &ReagentRecord {
        &self.dataset.records[row.record]
    }
}
