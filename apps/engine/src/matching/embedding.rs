//! Text embedding seam for semantic similarity.
//!
//! Any model producing comparable fixed-size vectors for both texts
//! satisfies the contract; the engine holds an `Arc<dyn TextEmbedder>`
//! and never depends on a specific backend. The default backend is a
//! deterministic term-frequency feature hasher; the `bert` feature adds
//! a sentence-transformer backend.

use crate::errors::EngineError;

/// Capability interface: encode text into a fixed-size dense vector.
/// Implementations are read-only after construction and safe to share
/// across concurrent callers.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EngineError>;
}

/// Cosine similarity in [-1, 1], with 0.0 for zero-length or zero-norm
/// input so empty documents compare as dissimilar instead of dividing
/// by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Term-frequency feature-hashing embedder.
///
/// Tokens are lowercased, FNV-1a-hashed into a fixed number of buckets,
/// counted, and L2-normalized. Fully deterministic, and every component
/// is non-negative, so cosine similarity stays in [0, 1].
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    pub const DEFAULT_DIM: usize = 384;

    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIM)
    }
}

impl TextEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EngineError> {
        let mut vector = vec![0.0_f32; self.dim];
        for token in text.to_lowercase().split_whitespace() {
            let token = token.trim_matches(|c| c == '.' || c == ',');
            if token.is_empty() {
                continue;
            }
            let bucket = (fnv1a(token.as_bytes()) % self.dim as u64) as usize;
            vector[bucket] += 1.0;
        }
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for component in &mut vector {
                *component /= norm;
            }
        }
        Ok(vector)
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

// FNV-1a with fixed constants: hashing must be identical across runs for
// the determinism guarantee, so std's keyed DefaultHasher is out.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
