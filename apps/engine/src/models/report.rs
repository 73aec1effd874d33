use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full match report returned to callers.
///
/// Scores are percentages rounded to two decimals. All skill lists are
/// lowercase and sorted. `matched_skills_count + missing_skills_count`
/// always equals `total_required_skills` (required duplicates collapsed),
/// and `overall_match = round(semantic_match * 0.4 + skill_match * 0.6)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub job_title: String,
    pub overall_match: f64,
    pub semantic_match: f64,
    pub skill_match: f64,
    pub total_required_skills: usize,
    pub matched_skills_count: usize,
    pub missing_skills_count: usize,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub user_skills: Vec<String>,
    pub categorized_user_skills: BTreeMap<String, Vec<String>>,
    pub categorized_missing_skills: BTreeMap<String, Vec<String>>,
    pub learning_resources: BTreeMap<String, String>,
    pub job_description: String,
}
