//! Explicit source cache.
//!
//! Loading the source is the only blocking operation in the pipeline, so
//! repeated renders memoize it here, keyed by source identity plus a
//! modification signature. Staleness is acceptable for a reporting tool;
//! `invalidate` forces a reload on the next access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use shelfwatch_model::{Dataset, FieldMap, Result};

use crate::loader::load_dataset;

/// Modification signature of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceSignature {
    modified: Option<SystemTime>,
    len: u64,
}

impl SourceSignature {
    fn probe(path: &Path) -> Option<Self> {
        let metadata = std::fs::metadata(path).ok()?;
        Some(Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

struct CachedSource {
    signature: Option<SourceSignature>,
    dataset: Arc<Dataset>,
}

/// Memoizes loaded datasets per source path.
pub struct SourceCache {
    map: FieldMap,
    entries: HashMap<PathBuf, CachedSource>,
}

impl SourceCache {
    pub fn new(map: FieldMap) -> Self {
        Self {
            map,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached dataset when the source signature is unchanged,
    /// otherwise reloads.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Dataset>> {
        let signature = SourceSignature::probe(path);
        if let Some(entry) = self.entries.get(path)
            && entry.signature.is_some()
            && entry.signature == signature
        {
            debug!(source = %path.display(), "source cache hit");
            return Ok(Arc::clone(&entry.dataset));
        }
        debug!(source = %path.display(), "source cache miss, loading");
        let dataset = Arc::new(load_dataset(path, &self.map)?);
        self.entries.insert(
            path.to_path_buf(),
            CachedSource {
                signature,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drops the cached entry for one source.
    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
