#[cfg(feature = "bert")]
pub mod bert;
pub mod categories;
pub mod embedding;
pub mod engine;

#[cfg(feature = "bert")]
pub use bert::SentenceBertEmbedder;
pub use categories::{CategoryTable, SkillCategory};
pub use embedding::{cosine_similarity, HashingEmbedder, TextEmbedder};
pub use engine::MatchEngine;
