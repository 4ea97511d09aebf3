//! Skill vocabulary — the fixed dictionary of recognised skill phrases.
//!
//! Built once at startup and never mutated. Construction validates the list so a
//! misconfigured vocabulary stops the process before the listener binds.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::skills::tokenizer::tokenize;

#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("skill vocabulary is empty")]
    Empty,

    #[error("skill phrase at position {0} is empty")]
    EmptyPhrase(usize),

    #[error("skill phrase '{0}' appears more than once")]
    Duplicate(String),
}

/// Built-in vocabulary. Phrases are lowercase; multi-word phrases are matched as
/// contiguous token runs.
pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php",
    "swift", "kotlin", "go", "rust", "scala", "r", "matlab", "sql",
    // Web
    "html", "css", "react", "angular", "vue", "node.js", "express", "django",
    "flask", "fastapi", "spring boot", "asp.net", "next.js", "nuxt.js",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Data science and ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
    "scikit-learn", "pandas", "numpy", "data analysis", "data visualization",
    "nlp", "computer vision", "neural networks",
    // Cloud and DevOps
    "aws", "azure", "google cloud", "gcp", "docker", "kubernetes", "jenkins",
    "ci/cd", "terraform", "ansible", "linux", "bash", "git", "github",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "oracle",
    "sql server", "cassandra", "dynamodb",
    // Practices and tooling
    "rest api", "graphql", "microservices", "agile", "scrum", "jira",
    "unit testing", "integration testing", "tdd", "oauth", "jwt",
    // Soft skills
    "leadership", "communication", "problem solving", "teamwork",
    "project management", "critical thinking",
];

/// An immutable, validated, ordered list of lowercase skill phrases.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    phrases: Vec<String>,
}

impl SkillVocabulary {
    /// Validates and normalises a phrase list.
    ///
    /// Phrases are trimmed, lowercased and internal whitespace collapsed before
    /// the duplicate check, so "Machine  Learning" and "machine learning" collide.
    pub fn new<I, S>(phrases: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalised = Vec::new();

        for (position, raw) in phrases.into_iter().enumerate() {
            let phrase = normalise_phrase(raw.as_ref());
            if phrase.is_empty() || tokenize(&phrase).is_empty() {
                return Err(VocabularyError::EmptyPhrase(position));
            }
            if !seen.insert(phrase.clone()) {
                return Err(VocabularyError::Duplicate(phrase));
            }
            normalised.push(phrase);
        }

        if normalised.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { phrases: normalised })
    }

    pub fn builtin() -> Result<Self, VocabularyError> {
        Self::new(DEFAULT_SKILLS)
    }

    /// Loads a vocabulary file: one phrase per line, blank lines and `#` comments skipped.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary '{}'", path.display()))?;

        let phrases = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        Self::new(phrases)
            .with_context(|| format!("Invalid skill vocabulary in '{}'", path.display()))
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

fn normalise_phrase(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
