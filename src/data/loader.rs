//! Dataset Summarizer Module
//! Loads KEV CSV files and keeps them for the rest of the session.

use super::Dataset;
use crate::error::DashboardError;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads datasets on demand and caches each one by the path it was
/// requested with. Entries live until the summarizer is dropped.
#[derive(Default)]
pub struct DatasetSummarizer {
    cache: HashMap<PathBuf, Arc<Dataset>>,
}

impl DatasetSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a CSV file, reusing the cached copy if one exists.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Dataset>, DashboardError> {
        if let Some(dataset) = self.cache.get(path) {
            debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Dataset::read_csv(path).inspect_err(|e| warn!("{}", e))?;
        Ok(self.insert(path, dataset))
    }

    /// Store a dataset read elsewhere (e.g. on a loader thread).
    pub fn insert(&mut self, path: &Path, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        info!(
            "Loaded {} rows, {} columns from {}",
            dataset.height(),
            dataset.column_names().len(),
            path.display()
        );
        self.cache.insert(path.to_path_buf(), Arc::clone(&dataset));
        dataset
    }

    /// Get a cached dataset without touching the disk.
    pub fn cached(&self, path: &Path) -> Option<Arc<Dataset>> {
        self.cache.get(path).cloned()
    }

    /// Forget a cached dataset so the next `load` re-reads the file.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.cache.remove(path).is_some()
    }
}
