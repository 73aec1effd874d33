//! Read-only job catalog access.
//!
//! The catalog is an external data source consumed, not owned, by the
//! engine: a JSON mapping from job title to description, required
//! skills, and learning-resource URLs. Persistence format and reload
//! policy are the caller's concern.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::errors::EngineError;
use crate::models::JobRecord;

#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: HashMap<String, JobRecord>,
}

impl JobCatalog {
    /// Loads the catalog from a JSON file.
    ///
    /// An unavailable backing store (missing or unreadable file) yields
    /// an empty catalog with a warning; unknown titles then surface as
    /// `UnknownJobTitle` at match time rather than as a load error. A
    /// present but malformed file is a real `Catalog` error.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "job catalog unavailable, starting empty");
                return Ok(Self::default());
            }
        };
        let jobs: HashMap<String, JobRecord> = serde_json::from_str(&raw)
            .map_err(|e| EngineError::Catalog(format!("malformed catalog file: {e}")))?;
        info!(path = %path.display(), jobs = jobs.len(), "job catalog loaded");
        Ok(Self { jobs })
    }

    /// Builds a catalog from in-memory records.
    pub fn from_jobs(jobs: HashMap<String, JobRecord>) -> Self {
        Self { jobs }
    }

    pub fn get(&self, title: &str) -> Option<&JobRecord> {
        self.jobs.get(title)
    }

    /// All catalog titles, sorted. Boundary layers use this to populate
    /// selection lists.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.jobs.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
