use std::path::PathBuf;

use thiserror::Error;

use crate::fields::FieldId;

#[derive(Debug, Error)]
pub enum ShelfwatchError {
    /// The tabular source could not be opened or read at all. Callers are
    /// expected to surface this as "no data" rather than crash.
    #[error("source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// A required logical field could not be resolved against the source
    /// headers. Carries every resolved header so the caller can diagnose
    /// the naming mismatch.
    #[error("column for required field `{field}` not found; resolved headers: [{}]", headers.join(", "))]
    MissingColumn {
        field: FieldId,
        headers: Vec<String>,
    },

    /// The export schema contract was violated, e.g. the remaining-days
    /// header collides with a source column. This is a logic error in the
    /// classifier/exporter contract, not a recoverable user condition.
    #[error("export schema violation: {0}")]
    Schema(String),

    /// The export destination could not be written.
    #[error("write failed: {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShelfwatchError>;
