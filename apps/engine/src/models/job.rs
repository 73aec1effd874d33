use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One job posting as stored in the catalog. The catalog key is the job
/// title; within a catalog snapshot a title uniquely identifies a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Free text compared against the resume via embeddings.
    pub description: String,
    /// Declared required skills. Duplicates are collapsed at match time.
    pub required_skills: Vec<String>,
    /// Per-skill learning resource URLs, consulted only for missing skills.
    #[serde(default)]
    pub resources: HashMap<String, String>,
}
