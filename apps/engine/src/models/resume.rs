use std::collections::BTreeSet;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Document formats the extractor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a file extension (with or without the leading dot, any case)
    /// to a format. Anything else is `UnsupportedFormat`, raised before
    /// extraction is attempted.
    pub fn from_extension(ext: &str) -> Result<Self, EngineError> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(EngineError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A raw document as supplied by the caller: bytes plus declared format.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
    pub bytes: Bytes,
    pub format: DocumentFormat,
}

impl DocumentPayload {
    pub fn new(bytes: impl Into<Bytes>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }
}

/// Structured data extracted from one resume document.
///
/// Value object: created per analysis request, immutable afterwards,
/// discarded once the matching call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Unprocessed extracted text, paragraph structure intact.
    pub raw_text: String,
    /// Whitespace-collapsed text with non-semantic characters removed.
    pub cleaned_text: String,
    /// Deduplicated lowercase skill tokens.
    pub skills: BTreeSet<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ResumeRecord {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_extension("PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_extension(".docx").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_from_extension_rejects_unknown() {
        let err = DocumentFormat::from_extension("txt").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_skill_count_matches_set_size() {
        let mut skills = BTreeSet::new();
        skills.insert("python".to_string());
        skills.insert("sql".to_string());
        let record = ResumeRecord {
            raw_text: String::new(),
            cleaned_text: String::new(),
            skills,
            email: None,
            phone: None,
        };
        assert_eq!(record.skill_count(), 2);
    }
}
