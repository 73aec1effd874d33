use std::path::PathBuf;

use anyhow::{Context, Result};

/// Engine configuration. Every field has a sensible default; the
/// environment (or a `.env` file) can override each one.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// JSON job catalog location.
    pub catalog_path: PathBuf,
    /// Dimensionality of the hashing embedder.
    pub embedding_dim: usize,
    /// Maximum characters of raw text fed to the entity-assisted scan.
    pub entity_scan_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/job_descriptions.json"),
            embedding_dim: crate::matching::HashingEmbedder::DEFAULT_DIM,
            entity_scan_cap: crate::extract::DEFAULT_ENTITY_SCAN_CAP,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(Self {
            catalog_path: std::env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            embedding_dim: env_usize("EMBEDDING_DIM", defaults.embedding_dim)?,
            entity_scan_cap: env_usize("ENTITY_SCAN_CAP", defaults.entity_scan_cap)?,
        })
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .with_context(|| format!("'{key}' must be a positive integer")),
        Err(_) => Ok(default),
    }
}
