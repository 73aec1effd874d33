//! Weighted resume-to-job match computation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::JobCatalog;
use crate::errors::EngineError;
use crate::matching::categories::CategoryTable;
use crate::matching::embedding::{cosine_similarity, TextEmbedder};
use crate::models::{JobRecord, MatchReport, ResumeRecord};

/// Exact skill overlap outweighs prose similarity: required-skill
/// presence is the stronger signal.
const SEMANTIC_WEIGHT: f64 = 0.4;
const SKILL_WEIGHT: f64 = 0.6;

/// Scores a parsed resume against catalog entries. Pure computation over
/// its two inputs and the read-only catalog snapshot; safe to share
/// across concurrent callers.
pub struct MatchEngine {
    catalog: JobCatalog,
    embedder: Arc<dyn TextEmbedder>,
    categories: CategoryTable,
}

impl MatchEngine {
    pub fn new(
        catalog: JobCatalog,
        embedder: Arc<dyn TextEmbedder>,
        categories: CategoryTable,
    ) -> Self {
        Self {
            catalog,
            embedder,
            categories,
        }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Computes the full match report for one job title.
    ///
    /// Fails with `UnknownJobTitle` before any scoring work if the title
    /// is absent from the catalog; no partial result is ever produced.
    pub fn match_resume(
        &self,
        resume: &ResumeRecord,
        job_title: &str,
    ) -> Result<MatchReport, EngineError> {
        let job = self
            .catalog
            .get(job_title)
            .ok_or_else(|| EngineError::UnknownJobTitle(job_title.to_string()))?;

        let semantic_match = self.semantic_match(&resume.cleaned_text, &job.description)?;

        let required = normalized_skill_set(&job.required_skills);
        let user: BTreeSet<String> = resume
            .skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let matched_skills: Vec<String> = required.intersection(&user).cloned().collect();
        let missing_skills: Vec<String> = required.difference(&user).cloned().collect();

        // Defined policy for an empty requirement list, not a division error.
        let skill_match = if required.is_empty() {
            0.0
        } else {
            round2(matched_skills.len() as f64 / required.len() as f64 * 100.0)
        };
        let overall_match = round2(semantic_match * SEMANTIC_WEIGHT + skill_match * SKILL_WEIGHT);

        let categorized_user_skills = self.categories.categorize(user.iter().map(String::as_str));
        let categorized_missing_skills = self
            .categories
            .categorize(missing_skills.iter().map(String::as_str));
        let learning_resources = resources_for_missing(job, &missing_skills);

        info!(
            job_title,
            overall_match, semantic_match, skill_match, "match computed"
        );

        Ok(MatchReport {
            job_title: job_title.to_string(),
            overall_match,
            semantic_match,
            skill_match,
            total_required_skills: required.len(),
            matched_skills_count: matched_skills.len(),
            missing_skills_count: missing_skills.len(),
            matched_skills,
            missing_skills,
            user_skills: user.into_iter().collect(),
            categorized_user_skills,
            categorized_missing_skills,
            learning_resources,
            job_description: job.description.clone(),
        })
    }

    fn semantic_match(&self, resume_text: &str, job_description: &str) -> Result<f64, EngineError> {
        let resume_vec = self.embedder.embed(resume_text)?;
        let job_vec = self.embedder.embed(job_description)?;
        let similarity = cosine_similarity(&resume_vec, &job_vec);
        debug!(similarity, "semantic similarity computed");
        Ok(round2(f64::from(similarity) * 100.0))
    }
}

/// Trimmed, lowercased, deduplicated skill set.
fn normalized_skill_set(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Learning resources for missing skills only; skills without an entry
/// are left out of the mapping.
fn resources_for_missing(job: &JobRecord, missing: &[String]) -> BTreeMap<String, String> {
    missing
        .iter()
        .filter_map(|skill| {
            job.resources
                .get(skill)
                .map(|url| (skill.clone(), url.clone()))
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::embedding::HashingEmbedder;
    use std::collections::HashMap;

    fn engine_with(jobs: Vec<(&str, JobRecord)>) -> MatchEngine {
        let catalog = JobCatalog::from_jobs(
            jobs.into_iter().map(|(t, j)| (t.to_string(), j)).collect(),
        );
        MatchEngine::new(
            catalog,
            Arc::new(HashingEmbedder::default()),
            CategoryTable::default(),
        )
    }

    fn data_scientist_job() -> JobRecord {
        JobRecord {
            description: "We are looking for a Data Scientist skilled in Python, SQL, \
                          machine learning, pandas and TensorFlow."
                .to_string(),
            required_skills: vec![
                "python".to_string(),
                "sql".to_string(),
                "machine learning".to_string(),
                "pandas".to_string(),
                "tensorflow".to_string(),
            ],
            resources: HashMap::from([
                (
                    "tensorflow".to_string(),
                    "https://www.tensorflow.org/tutorials".to_string(),
                ),
                (
                    "sql".to_string(),
                    "https://mode.com/sql-tutorial".to_string(),
                ),
            ]),
        }
    }

    fn resume(skills: &[&str], cleaned_text: &str) -> ResumeRecord {
        ResumeRecord {
            raw_text: cleaned_text.to_string(),
            cleaned_text: cleaned_text.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            email: None,
            phone: None,
        }
    }

    #[test]
    fn test_data_scientist_scenario() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let resume = resume(
            &["python", "sql", "machine learning", "pandas"],
            "Data Scientist with experience in Python, SQL, and machine learning.",
        );

        let report = engine.match_resume(&resume, "Data Scientist").unwrap();
        assert_eq!(report.skill_match, 80.0);
        assert_eq!(report.matched_skills_count, 4);
        assert_eq!(report.missing_skills, vec!["tensorflow".to_string()]);
        assert_eq!(report.total_required_skills, 5);
    }

    #[test]
    fn test_overall_is_weighted_sum_of_components() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let resume = resume(
            &["python", "sql"],
            "python and sql practitioner looking for data work",
        );

        let report = engine.match_resume(&resume, "Data Scientist").unwrap();
        let expected = round2(report.semantic_match * 0.4 + report.skill_match * 0.6);
        assert!((report.overall_match - expected).abs() < 0.01);
    }

    #[test]
    fn test_matched_plus_missing_equals_total() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let resume = resume(&["python", "keras"], "python practitioner");

        let report = engine.match_resume(&resume, "Data Scientist").unwrap();
        assert_eq!(
            report.matched_skills_count + report.missing_skills_count,
            report.total_required_skills
        );
    }

    #[test]
    fn test_required_duplicates_collapse() {
        let job = JobRecord {
            description: "desc".to_string(),
            required_skills: vec![
                "python".to_string(),
                "Python ".to_string(),
                "sql".to_string(),
            ],
            resources: HashMap::new(),
        };
        let engine = engine_with(vec![("Role", job)]);
        let report = engine
            .match_resume(&resume(&["python"], "python"), "Role")
            .unwrap();
        assert_eq!(report.total_required_skills, 2);
        assert_eq!(report.skill_match, 50.0);
    }

    #[test]
    fn test_empty_required_skills_policy() {
        let job = JobRecord {
            description: "Anything goes.".to_string(),
            required_skills: vec![],
            resources: HashMap::new(),
        };
        let engine = engine_with(vec![("Generalist", job)]);
        let report = engine
            .match_resume(&resume(&["python"], "text"), "Generalist")
            .unwrap();
        assert_eq!(report.skill_match, 0.0);
        assert_eq!(report.total_required_skills, 0);
    }

    #[test]
    fn test_unknown_job_title_fails_without_result() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let err = engine
            .match_resume(&resume(&["python"], "text"), "Nonexistent Title")
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownJobTitle(_)));
    }

    #[test]
    fn test_semantic_match_within_bounds_and_stable() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let resume = resume(
            &["python"],
            "Data scientist building python models over sql warehouses",
        );
        let first = engine.match_resume(&resume, "Data Scientist").unwrap();
        let second = engine.match_resume(&resume, "Data Scientist").unwrap();
        assert!((0.0..=100.0).contains(&first.semantic_match));
        assert!((first.semantic_match - second.semantic_match).abs() < 1e-6);
    }

    #[test]
    fn test_skill_match_bounds() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let none = engine
            .match_resume(&resume(&["fortran"], "fortran"), "Data Scientist")
            .unwrap();
        assert_eq!(none.skill_match, 0.0);
        let all = engine
            .match_resume(
                &resume(
                    &["python", "sql", "machine learning", "pandas", "tensorflow"],
                    "everything",
                ),
                "Data Scientist",
            )
            .unwrap();
        assert_eq!(all.skill_match, 100.0);
    }

    #[test]
    fn test_learning_resources_only_for_missing_with_entries() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let report = engine
            .match_resume(
                &resume(&["python", "pandas"], "python and pandas"),
                "Data Scientist",
            )
            .unwrap();
        // "sql" and "tensorflow" are missing and have URLs; "machine
        // learning" is missing but has no resource entry.
        assert_eq!(report.learning_resources.len(), 2);
        assert!(report.learning_resources.contains_key("tensorflow"));
        assert!(report.learning_resources.contains_key("sql"));
        assert!(!report.learning_resources.contains_key("machine learning"));
    }

    #[test]
    fn test_user_skills_case_folded_for_matching() {
        let job = data_scientist_job();
        let engine = engine_with(vec![("Data Scientist", job)]);
        let report = engine
            .match_resume(&resume(&[" Python ", "SQL"], "text"), "Data Scientist")
            .unwrap();
        assert_eq!(report.matched_skills_count, 2);
        assert_eq!(report.user_skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_categorized_outputs_cover_user_and_missing() {
        let engine = engine_with(vec![("Data Scientist", data_scientist_job())]);
        let report = engine
            .match_resume(&resume(&["python", "sql"], "text"), "Data Scientist")
            .unwrap();
        assert!(report.categorized_user_skills.contains_key("Programming Languages"));
        assert!(report
            .categorized_missing_skills
            .contains_key("Machine Learning & AI"));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(80.0), 80.0);
        assert_eq!(round2(0.005), 0.01);
    }
}
