//! Loader/Normalizer for the reagent shelf-life tracker.
//!
//! Reads a tabular source wholesale, normalizes headers, resolves logical
//! fields, and coerces the expiry-date column leniently. Reading the
//! source is the only side effect; nothing here mutates the source or any
//! global state.

pub mod cache;
pub mod dates;
pub mod loader;
pub mod table;

pub use cache::SourceCache;
pub use dates::coerce_date;
pub use loader::{dataset_from_table, load_dataset, load_dataset_or_empty};
pub use table::{RawTable, read_csv_table};
