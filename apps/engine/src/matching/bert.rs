//! Sentence-transformer embedding backend, compiled only with the
//! `bert` feature.

use std::sync::Mutex;

use rust_bert::pipelines::sentence_embeddings::{
    SentenceEmbeddingsBuilder, SentenceEmbeddingsModel, SentenceEmbeddingsModelType,
};

use crate::errors::EngineError;
use crate::matching::embedding::TextEmbedder;

/// all-MiniLM-L6-v2 sentence encoder. Loads weights on construction;
/// a load failure is `EngineUnavailable`, never a panic. The tch-backed
/// model is not `Sync`, hence the mutex.
pub struct SentenceBertEmbedder {
    model: Mutex<SentenceEmbeddingsModel>,
}

impl SentenceBertEmbedder {
    pub fn new() -> Result<Self, EngineError> {
        let model = SentenceEmbeddingsBuilder::remote(SentenceEmbeddingsModelType::AllMiniLmL6V2)
            .create_model()
            .map_err(|e| {
                EngineError::EngineUnavailable(format!("sentence embedding model load failed: {e}"))
            })?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl TextEmbedder for SentenceBertEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EngineError> {
        let model = self.model.lock().map_err(|_| {
            EngineError::EngineUnavailable("sentence embedding model lock poisoned".to_string())
        })?;
        let mut batches = model.encode(&[text]).map_err(|e| {
            EngineError::EngineUnavailable(format!("sentence encoding failed: {e}"))
        })?;
        batches
            .pop()
            .ok_or_else(|| EngineError::EngineUnavailable("empty embedding batch".to_string()))
    }
}
