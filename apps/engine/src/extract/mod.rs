pub mod contact;
pub mod document;
#[cfg(feature = "bert")]
pub mod entities;
pub mod normalize;
pub mod skills;
pub mod vocabulary;

pub use contact::{extract_email, extract_phone};
pub use document::{extract_path, extract_text};
pub use normalize::normalize;
pub use skills::{EntityTagger, SkillExtractor, DEFAULT_ENTITY_SCAN_CAP};
pub use vocabulary::SkillVocabulary;
