//! Transformer-backed entity tagger, compiled only with the `bert`
//! feature. Correctness of skill extraction never depends on this pass.

use std::sync::Mutex;

use rust_bert::pipelines::ner::NERModel;
use tracing::warn;

use crate::errors::EngineError;
use crate::extract::skills::EntityTagger;

/// Candidate labels worth forwarding: organizations and miscellaneous
/// proper nouns cover tool, product, and language mentions.
const CANDIDATE_LABELS: &[&str] = &["I-ORG", "B-ORG", "I-MISC", "B-MISC"];

/// NER-based tagger over rust-bert's token classification pipeline.
/// The model is wrapped in a mutex because the tch-backed pipeline is
/// not `Sync`.
pub struct BertEntityTagger {
    model: Mutex<NERModel>,
}

impl BertEntityTagger {
    pub fn new() -> Result<Self, EngineError> {
        let model = NERModel::new(Default::default())
            .map_err(|e| EngineError::EngineUnavailable(format!("NER model load failed: {e}")))?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl EntityTagger for BertEntityTagger {
    fn candidates(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let Ok(model) = self.model.lock() else {
            warn!("NER model lock poisoned, skipping entity pass");
            return Vec::new();
        };
        model
            .predict(&[text])
            .into_iter()
            .flatten()
            .filter(|entity| CANDIDATE_LABELS.contains(&entity.label.as_str()))
            .map(|entity| entity.word)
            .collect()
    }
}
