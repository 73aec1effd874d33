//! Resume-to-job matching engine.
//!
//! Takes a resume document (PDF or DOCX bytes) and a job title, and
//! produces a structured match report: semantic similarity between the
//! resume and the job description, exact required-skill overlap, the
//! skill gap with learning resources, and a weighted overall score.
//!
//! The boundary layer (upload handling, HTTP, UI) lives elsewhere; this
//! crate is the synchronous, stateless core it calls into:
//!
//! ```no_run
//! use engine::{Analyzer, DocumentFormat, DocumentPayload, EngineConfig};
//!
//! # fn main() -> Result<(), engine::EngineError> {
//! let analyzer = Analyzer::from_config(&EngineConfig::default())?;
//! let payload = DocumentPayload::new(std::fs::read("resume.pdf")?, DocumentFormat::Pdf);
//! let report = analyzer.analyze(&payload, "Data Scientist")?;
//! println!("overall match: {}%", report.overall_match);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;

pub use analyzer::Analyzer;
pub use catalog::JobCatalog;
pub use config::EngineConfig;
pub use errors::EngineError;
pub use extract::{SkillExtractor, SkillVocabulary};
pub use matching::{CategoryTable, HashingEmbedder, MatchEngine, TextEmbedder};
pub use models::{DocumentFormat, DocumentPayload, JobRecord, MatchReport, ResumeRecord};
