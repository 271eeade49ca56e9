//! Expiry Classifier & Reporter.
//!
//! Given a dataset snapshot, a reference date, and an alert policy, this
//! crate produces the urgency-ordered listing, the attention subset, the
//! per-row fill plan, free-text search, and the colored CSV re-export.

pub mod classify;
pub mod export;
pub mod search;

pub use classify::{Classified, ClassifiedRow, classify, remaining_days};
pub use export::{ExportOutcome, ExportSchema, export_csv};
