//! Dataset construction: resolving logical fields against normalized
//! headers and coercing the expiry-date column.

use std::path::Path;

use tracing::{debug, warn};

use shelfwatch_model::{
    CellValue, Dataset, FieldId, FieldMap, ReagentRecord, ResolvedFields, Result, ShelfwatchError,
};

use crate::dates::coerce_date;
use crate::table::{RawTable, read_csv_table};

/// Loads and normalizes the source into a [`Dataset`].
///
/// # Errors
///
/// [`ShelfwatchError::SourceUnavailable`] when the source cannot be read;
/// [`ShelfwatchError::MissingColumn`] when the expiry-date column cannot
/// be resolved against the normalized headers.
pub fn load_dataset(path: &Path, map: &FieldMap) -> Result<Dataset> {
    let table = read_csv_table(path)?;
    let dataset = dataset_from_table(table, map)?;
    debug!(
        source = %path.display(),
        records = dataset.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Like [`load_dataset`], but maps an unavailable source to the uniform
/// empty dataset so rendering code can treat "no data" as an empty
/// sequence. Resolution failures still propagate.
pub fn load_dataset_or_empty(path: &Path, map: &FieldMap) -> Result<Dataset> {
    match load_dataset(path, map) {
        Ok(dataset) => Ok(dataset),
        Err(ShelfwatchError::SourceUnavailable { path, reason }) => {
            warn!(source = %path.display(), %reason, "source unavailable, presenting empty dataset");
            Ok(Dataset::empty())
        }
        Err(error) => Err(error),
    }
}

/// Builds a dataset from an already-read raw table.
pub fn dataset_from_table(table: RawTable, map: &FieldMap) -> Result<Dataset> {
    let mut fields = ResolvedFields::default();
    for (field, header) in map.iter() {
        if let Some(index) = table.headers.iter().position(|h| h == header) {
            fields.insert(field, index);
        }
    }
    for field in FieldId::all() {
        if field.is_required() && !fields.contains(field) {
            return Err(ShelfwatchError::MissingColumn {
                field,
                headers: table.headers,
            });
        }
    }
    let Some(expiry_index) = fields.index(FieldId::ExpiryDate) else {
        return Err(ShelfwatchError::MissingColumn {
            field: FieldId::ExpiryDate,
            headers: table.headers,
        });
    };

    let mut dataset = Dataset::new(table.headers, fields);
    for (row_index, row) in table.rows.into_iter().enumerate() {
        let raw_expiry = row.get(expiry_index).map(String::as_str).unwrap_or("");
        let expiry = coerce_date(raw_expiry);
        if expiry.is_none() && !raw_expiry.trim().is_empty() {
            debug!(row = row_index, value = raw_expiry, "unparsable expiry date");
        }
        let cells = row
            .into_iter()
            .map(|value| {
                if value.is_empty() {
                    CellValue::Missing
                } else {
                    CellValue::Text(value)
                }
            })
            .collect();
        dataset.push_record(ReagentRecord { cells, expiry });
    }
    Ok(dataset)
}
