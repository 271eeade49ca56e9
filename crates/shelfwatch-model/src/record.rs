use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::{FieldId, ResolvedFields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Display text for the cell; missing cells render as the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Missing => "",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One row of the source table.
///
/// Cells are positionally aligned with [`Dataset::columns`]. The expiry
/// date is parsed once at load time; `None` is the explicit "no date"
/// sentinel for missing or unparsable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReagentRecord {
    pub cells: Vec<CellValue>,
    pub expiry: Option<NaiveDate>,
}

impl ReagentRecord {
    pub fn cell(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&CellValue::Missing)
    }
}

/// An ordered, immutable snapshot of one load: the fixed column set, the
/// records in source order, and the resolved logical-field indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<ReagentRecord>,
    pub fields: ResolvedFields,
}

impl Dataset {
    pub fn new(columns: Vec<String>, fields: ResolvedFields) -> Self {
        Self {
            columns,
            records: Vec::new(),
            fields,
        }
    }

    /// The uniform "no data" result used when the source is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_record(&mut self, record: ReagentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display text for a logical field of one record; unresolved fields
    /// and missing cells both degrade to the empty string.
    pub fn field_text<'a>(&self, record: &'a ReagentRecord, field: FieldId) -> &'a str {
        match self.fields.index(field) {
            Some(index) => record.cell(index).as_str(),
            None => "",
        }
    }
}
