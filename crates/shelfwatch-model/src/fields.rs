//! Logical field identities and the mapping from logical fields to the
//! actual column headers of a given source file.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical fields the loader knows how to resolve.
///
/// Only [`FieldId::ExpiryDate`] is required; every other field degrades to
/// an empty display value when its column is absent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Product name.
    Name,
    /// Reagent kind or storage location.
    Kind,
    /// Expiry date column (required).
    ExpiryDate,
    /// Hazard description.
    Danger,
    /// Registration date.
    Registered,
}

impl FieldId {
    pub fn all() -> [FieldId; 5] {
        [
            Self::Name,
            Self::Kind,
            Self::ExpiryDate,
            Self::Danger,
            Self::Registered,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "kind",
            Self::ExpiryDate => "expiry_date",
            Self::Danger => "danger",
            Self::Registered => "registered",
        }
    }

    /// Whether a load must fail when this field cannot be resolved.
    pub fn is_required(self) -> bool {
        matches!(self, Self::ExpiryDate)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from logical fields to source column headers.
///
/// Header matching happens after normalization (whitespace trimmed, BOM and
/// embedded line breaks stripped), so minor formatting differences in the
/// source do not break resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    entries: BTreeMap<FieldId, String>,
}

impl Default for FieldMap {
    /// Headers used by the original lab inventory spreadsheets.
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(FieldId::Name, "시약이름".to_string());
        entries.insert(FieldId::Kind, "시약종류".to_string());
        entries.insert(FieldId::ExpiryDate, "유통기한".to_string());
        entries.insert(FieldId::Danger, "위험성".to_string());
        entries.insert(FieldId::Registered, "등록일".to_string());
        Self { entries }
    }
}

impl FieldMap {
    pub fn header(&self, field: FieldId) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FieldId, header: impl Into<String>) {
        self.entries.insert(field, header.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.entries
            .iter()
            .map(|(field, header)| (*field, header.as_str()))
    }
}

/// Column indices resolved against a concrete source, produced by the
/// loader and carried on the dataset so downstream code never repeats the
/// header search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFields {
    indices: BTreeMap<FieldId, usize>,
}

impl ResolvedFields {
    pub fn insert(&mut self, field: FieldId, index: usize) {
        self.indices.insert(field, index);
    }

    pub fn index(&self, field: FieldId) -> Option<usize> {
        self.indices.get(&field).copied()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.indices.contains_key(&field)
    }
}
