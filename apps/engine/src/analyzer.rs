//! Pipeline facade: document in, match report out.
//!
//! One `Analyzer` serves many independent requests; it holds only
//! read-only parts (vocabulary patterns, catalog snapshot, embedder), so
//! sharing it across threads needs no synchronization.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::JobCatalog;
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::extract::{self, SkillExtractor, SkillVocabulary};
use crate::matching::{CategoryTable, HashingEmbedder, MatchEngine};
use crate::models::{DocumentPayload, MatchReport, ResumeRecord};

pub struct Analyzer {
    skills: SkillExtractor,
    engine: MatchEngine,
}

impl Analyzer {
    /// Wires the default pipeline: catalog from disk, production
    /// vocabulary and category tables, hashing embedder.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let catalog = JobCatalog::load(&config.catalog_path)?;
        let skills = SkillExtractor::with_tagger(
            SkillVocabulary::default(),
            None,
            config.entity_scan_cap,
        )?;
        let engine = MatchEngine::new(
            catalog,
            Arc::new(HashingEmbedder::new(config.embedding_dim)),
            CategoryTable::default(),
        );
        Ok(Self { skills, engine })
    }

    /// Assembles an analyzer from explicitly built parts.
    pub fn new(skills: SkillExtractor, engine: MatchEngine) -> Self {
        Self { skills, engine }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Extracts and structures one resume document.
    ///
    /// Whitespace-only extraction output (zero-length document, scanned
    /// image without a text layer) is `ExtractionFailed`; nothing
    /// partial is returned.
    pub fn parse_document(&self, payload: &DocumentPayload) -> Result<ResumeRecord, EngineError> {
        let raw_text = extract::extract_text(payload)?;
        self.structure(raw_text)
    }

    /// Path-based variant of [`Self::parse_document`], dispatching on the
    /// file extension.
    pub fn parse_path(&self, path: &Path) -> Result<ResumeRecord, EngineError> {
        let raw_text = extract::extract_path(path)?;
        self.structure(raw_text)
    }

    /// Full analysis: parse the document, then score it against the
    /// named catalog entry.
    pub fn analyze(
        &self,
        payload: &DocumentPayload,
        job_title: &str,
    ) -> Result<MatchReport, EngineError> {
        let resume = self.parse_document(payload)?;
        self.engine.match_resume(&resume, job_title)
    }

    fn structure(&self, raw_text: String) -> Result<ResumeRecord, EngineError> {
        if raw_text.trim().is_empty() {
            return Err(EngineError::ExtractionFailed(
                "document produced no readable text".to_string(),
            ));
        }
        let cleaned_text = extract::normalize(&raw_text);
        let skills = self.skills.extract(&cleaned_text, &raw_text);
        // Contact patterns run over the raw text: normalization discards
        // the '@' and '(' characters they depend on.
        let email = extract::extract_email(&raw_text);
        let phone = extract::extract_phone(&raw_text);
        debug!(
            skills = skills.len(),
            has_email = email.is_some(),
            has_phone = phone.is_some(),
            "resume structured"
        );
        Ok(ResumeRecord {
            raw_text,
            cleaned_text,
            skills,
            email,
            phone,
        })
    }
}
