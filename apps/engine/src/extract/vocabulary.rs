//! Controlled skill vocabulary consumed by the extractor.
//!
//! The tables are configuration data, not hardwired globals: callers
//! construct a [`SkillVocabulary`] (tests use small fixtures) and inject
//! it into the extractor. `Default` ships the full production tables.

use serde::{Deserialize, Serialize};

/// Vocabulary driving the two deterministic skill-detection passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillVocabulary {
    /// Single- and compound-token skill names matched with word-boundary
    /// semantics.
    pub lexicon: Vec<String>,
    /// Multi-word phrases checked via plain substring containment.
    pub phrases: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary, lowercasing every entry.
    pub fn new(
        lexicon: impl IntoIterator<Item = impl Into<String>>,
        phrases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            lexicon: lexicon
                .into_iter()
                .map(|s| s.into().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            phrases: phrases
                .into_iter()
                .map(|s| s.into().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_LEXICON.iter().copied(), DEFAULT_PHRASES.iter().copied())
    }
}

const DEFAULT_LEXICON: &[&str] = &[
    // Languages
    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "kotlin",
    "go", "rust", "typescript", "r", "matlab", "scala", "perl",
    // Web and data stores
    "html", "css", "sql", "nosql", "mongodb", "postgresql", "mysql", "oracle",
    "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
    // ML/AI
    "machine learning", "deep learning", "ai", "nlp", "computer vision",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy",
    // DevOps and cloud
    "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
    "aws", "azure", "gcp", "cloud", "devops", "ci/cd",
    "rest api", "graphql", "microservices", "agile", "scrum",
    "linux", "unix", "bash", "shell", "powershell",
    // Analytics
    "tableau", "power bi", "excel", "data visualization",
    "spark", "hadoop", "kafka", "redis", "elasticsearch",
    // Design
    "figma", "sketch", "adobe xd", "photoshop", "illustrator",
    "ux", "ui", "wireframing", "prototyping", "user research",
    // Infrastructure
    "terraform", "ansible", "puppet", "chef",
    "monitoring", "prometheus", "grafana", "elk",
    "security", "networking", "vpn", "firewall",
    // Collaboration
    "jira", "confluence", "slack", "trello",
    // Testing and build tooling
    "testing", "junit", "pytest", "selenium", "jest",
    "webpack", "babel", "npm", "yarn",
    "responsive design", "bootstrap", "tailwind", "sass", "less",
    "redux", "mobx", "vuex", "next.js", "nuxt.js",
    // ML engineering
    "mlops", "model deployment", "feature engineering",
    "neural networks", "cnn", "rnn", "lstm", "transformer",
    // Foundations
    "statistics", "probability", "mathematics", "algorithms",
    "data structures", "object-oriented programming", "functional programming",
    "api", "json", "xml", "yaml", "regex",
];

const DEFAULT_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "computer vision",
    "natural language processing",
    "nlp",
    "data science",
    "data visualization",
    "web development",
    "mobile development",
    "cloud computing",
    "artificial intelligence",
    "big data",
    "user experience",
    "user interface",
    "responsive design",
    "rest api",
    "feature engineering",
    "model deployment",
    "neural networks",
    "object-oriented programming",
    "functional programming",
    "data structures",
];
