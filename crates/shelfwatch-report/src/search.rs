//! Free-text filtering over the classified listing.

use crate::classify::{Classified, ClassifiedRow};

impl Classified<'_> {
    /// Case-insensitive substring search across every stringified column.
    ///
    /// Preserves the established sort order. An empty or whitespace-only
    /// term returns the unfiltered listing.
    pub fn search(&self, term: &str) -> Vec<&ClassifiedRow> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| {
                self.record(row)
                    .cells
                    .iter()
                    .any(|cell| cell.as_str().to_lowercase().contains(&needle))
            })
            .collect()
    }
}
