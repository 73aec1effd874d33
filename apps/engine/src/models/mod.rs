pub mod job;
pub mod report;
pub mod resume;

pub use job::JobRecord;
pub use report::MatchReport;
pub use resume::{DocumentFormat, DocumentPayload, ResumeRecord};
