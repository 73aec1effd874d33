//! Skill categorization into named buckets.
//!
//! Membership tables are configuration injected at construction, like
//! the extraction vocabulary. A skill absent from every table is simply
//! omitted from the categorized output; there is no catch-all bucket.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTable {
    categories: Vec<SkillCategory>,
}

impl CategoryTable {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    /// Partitions `skills` into categories. Skills are compared
    /// lowercase; a skill may land in several categories if the tables
    /// overlap. Members come back sorted.
    pub fn categorize<'a, I>(&self, skills: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let skills: Vec<String> = skills.into_iter().map(str::to_lowercase).collect();
        let mut categorized = BTreeMap::new();
        for category in &self.categories {
            let mut matched: Vec<String> = skills
                .iter()
                .filter(|skill| category.keywords.iter().any(|k| k == *skill))
                .cloned()
                .collect();
            if !matched.is_empty() {
                matched.sort();
                matched.dedup();
                categorized.insert(category.name.clone(), matched);
            }
        }
        categorized
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let table = |name: &str, keywords: &[&str]| SkillCategory {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        };
        Self::new(vec![
            table(
                "Programming Languages",
                &[
                    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift",
                    "kotlin", "go", "rust", "typescript", "r", "scala",
                ],
            ),
            table(
                "Web Development",
                &[
                    "html", "css", "react", "angular", "vue", "node.js", "express", "django",
                    "flask", "spring", "bootstrap", "tailwind", "sass", "webpack", "next.js",
                    "responsive design",
                ],
            ),
            table(
                "Databases",
                &[
                    "sql", "nosql", "mongodb", "postgresql", "mysql", "oracle", "redis",
                    "elasticsearch",
                ],
            ),
            table(
                "Machine Learning & AI",
                &[
                    "machine learning", "deep learning", "ai", "nlp", "computer vision",
                    "tensorflow", "pytorch", "keras", "scikit-learn", "neural networks",
                    "cnn", "rnn", "lstm", "transformer",
                ],
            ),
            table(
                "Data Science",
                &[
                    "pandas", "numpy", "statistics", "data visualization", "tableau",
                    "power bi", "spark", "hadoop", "big data",
                ],
            ),
            table(
                "DevOps & Cloud",
                &[
                    "docker", "kubernetes", "jenkins", "aws", "azure", "gcp", "terraform",
                    "ansible", "ci/cd", "linux", "bash",
                ],
            ),
            table(
                "Design",
                &[
                    "figma", "sketch", "adobe xd", "photoshop", "illustrator", "ux", "ui",
                    "wireframing", "prototyping",
                ],
            ),
            table(
                "Tools & Others",
                &[
                    "git", "github", "jira", "agile", "scrum", "rest api", "graphql",
                    "testing", "selenium",
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skills_bucketed() {
        let categorized = CategoryTable::default().categorize(["python", "sql", "docker"]);
        assert_eq!(
            categorized.get("Programming Languages"),
            Some(&vec!["python".to_string()])
        );
        assert_eq!(categorized.get("Databases"), Some(&vec!["sql".to_string()]));
        assert_eq!(
            categorized.get("DevOps & Cloud"),
            Some(&vec!["docker".to_string()])
        );
    }

    #[test]
    fn test_unknown_skill_silently_omitted() {
        let categorized = CategoryTable::default().categorize(["underwater basket weaving"]);
        assert!(categorized.is_empty());
    }

    #[test]
    fn test_empty_categories_not_emitted() {
        let categorized = CategoryTable::default().categorize(["python"]);
        assert!(!categorized.contains_key("Design"));
    }

    #[test]
    fn test_case_folded_membership() {
        let categorized = CategoryTable::default().categorize(["Python", "TENSORFLOW"]);
        assert!(categorized.contains_key("Programming Languages"));
        assert!(categorized.contains_key("Machine Learning & AI"));
    }

    #[test]
    fn test_members_sorted_and_deduped() {
        let categorized = CategoryTable::default().categorize(["sql", "mongodb", "sql"]);
        assert_eq!(
            categorized.get("Databases"),
            Some(&vec!["mongodb".to_string(), "sql".to_string()])
        );
    }

    #[test]
    fn test_fixture_table_injection() {
        let table = CategoryTable::new(vec![SkillCategory {
            name: "Legacy".to_string(),
            keywords: vec!["cobol".to_string()],
        }]);
        let categorized = table.categorize(["cobol", "python"]);
        assert_eq!(categorized.len(), 1);
        assert_eq!(categorized.get("Legacy"), Some(&vec!["cobol".to_string()]));
    }
}
