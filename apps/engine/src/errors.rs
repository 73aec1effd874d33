use thiserror::Error;

/// Engine-level error type.
///
/// Every failure is a typed outcome: the engine never panics on bad input
/// and never returns a partial result alongside an error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Unknown job title: {0}")]
    UnknownJobTitle(String),

    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid skill pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
