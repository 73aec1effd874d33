//! Skill detection over normalized resume text.
//!
//! Three passes, results unioned: a word-boundary lexicon scan, a
//! substring phrase scan, and an optional entity-assisted scan behind a
//! pluggable [`EntityTagger`] strategy. The lexicon and phrase passes
//! alone are sufficient for correctness; the tagger only adds candidates.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;

use crate::errors::EngineError;
use crate::extract::vocabulary::SkillVocabulary;

/// Default cap on how much raw text the entity pass is fed.
pub const DEFAULT_ENTITY_SCAN_CAP: usize = 1_000_000;

/// Capability interface for entity-assisted detection: given text,
/// produce candidate skill strings. Candidates are filtered through the
/// lexicon before they can contribute, so a noisy tagger cannot invent
/// skills.
pub trait EntityTagger: Send + Sync {
    fn candidates(&self, text: &str) -> Vec<String>;
}

/// Detects occurrences of a controlled vocabulary inside cleaned text,
/// never fails, and returns an empty set for empty input.
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
    patterns: Vec<(String, Regex)>,
    lexicon_index: HashSet<String>,
    tagger: Option<Box<dyn EntityTagger>>,
    entity_scan_cap: usize,
}

impl SkillExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self, EngineError> {
        Self::with_tagger(vocabulary, None, DEFAULT_ENTITY_SCAN_CAP)
    }

    pub fn with_tagger(
        vocabulary: SkillVocabulary,
        tagger: Option<Box<dyn EntityTagger>>,
        entity_scan_cap: usize,
    ) -> Result<Self, EngineError> {
        let patterns = vocabulary
            .lexicon
            .iter()
            .map(|entry| {
                Regex::new(&lexicon_pattern(entry)).map(|re| (entry.clone(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let lexicon_index = vocabulary.lexicon.iter().cloned().collect();
        Ok(Self {
            vocabulary,
            patterns,
            lexicon_index,
            tagger,
            entity_scan_cap,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Runs all passes and unions the results. `cleaned_text` feeds the
    /// lexicon and phrase scans; `raw_text` feeds the entity pass (capped
    /// to bound tagger cost on huge documents).
    pub fn extract(&self, cleaned_text: &str, raw_text: &str) -> BTreeSet<String> {
        let text_lower = cleaned_text.to_lowercase();
        let mut found = BTreeSet::new();

        for (skill, pattern) in &self.patterns {
            if pattern.is_match(&text_lower) {
                found.insert(skill.clone());
            }
        }

        for phrase in &self.vocabulary.phrases {
            if text_lower.contains(phrase.as_str()) {
                found.insert(phrase.clone());
            }
        }

        if let Some(tagger) = &self.tagger {
            let prefix = bounded_prefix(raw_text, self.entity_scan_cap);
            for candidate in tagger.candidates(prefix) {
                let candidate = candidate.trim().to_lowercase();
                if self.lexicon_index.contains(&candidate) {
                    found.insert(candidate);
                }
            }
        }

        found
    }
}

/// Builds the match pattern for one lexicon entry.
///
/// `\b` anchors are applied only on alphanumeric edges; entries ending in
/// a symbol (`c++`, `c#`) instead require a non-token character or
/// end-of-text, since `\b` between two non-word characters never matches.
fn lexicon_pattern(entry: &str) -> String {
    let escaped = regex::escape(entry);
    let leading = if entry.starts_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    let trailing = if entry.ends_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        r"(?:[^\w+#]|$)"
    };
    format!("{leading}{escaped}{trailing}")
}

fn bounded_prefix(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
