//! Per-job skill-gap analysis: extract what the posting asks for, compare it with
//! the candidate's skills, and attach an improvement suggestion.

pub mod handlers;
pub mod prompts;
pub mod suggestion;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jobs::JobPosting;
use crate::llm_client::LlmClient;
use crate::skills::{compare_with_posting, DisplayPolicy, SkillMatcher};
use self::suggestion::{suggest, Suggestion, SuggestionInput};

/// Analysis of one posting against the candidate's skills, shaped for display.
///
/// `matched_skills` holds placeholder entries when `matched_is_placeholder` is set,
/// and `missing_skills` holds only a sentinel when `no_critical_gaps` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_is_placeholder: bool,
    pub no_critical_gaps: bool,
    pub improvement_suggestion: Suggestion,
}

#[derive(Clone)]
pub struct SkillGapAnalyzer {
    matcher: Arc<SkillMatcher>,
    policy: DisplayPolicy,
    llm: Option<LlmClient>,
}

impl SkillGapAnalyzer {
    pub fn new(matcher: Arc<SkillMatcher>, policy: DisplayPolicy, llm: Option<LlmClient>) -> Self {
        Self {
            matcher,
            policy,
            llm,
        }
    }

    pub async fn analyze(&self, posting: &JobPosting, candidate_skills: &[String]) -> SkillAnalysis {
        let required = self.matcher.extract_skills(&posting.job_description);
        debug!(
            "Posting {} requires {} known skills",
            posting.job_id,
            required.len()
        );

        let comparison = compare_with_posting(candidate_skills, &required, &posting.job_description);
        let view = comparison.to_view(candidate_skills, &self.policy);

        let improvement_suggestion = suggest(
            self.llm.as_ref(),
            &SuggestionInput {
                job_title: &posting.title,
                candidate_skills,
                comparison: &comparison,
                view: &view,
            },
        )
        .await;

        SkillAnalysis {
            matched_skills: view.matched,
            missing_skills: view.missing,
            matched_is_placeholder: view.matched_is_placeholder,
            no_critical_gaps: view.no_critical_gaps,
            improvement_suggestion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::compare::NO_GAPS_SENTINEL;
    use crate::skills::SkillVocabulary;

    fn analyzer() -> SkillGapAnalyzer {
        let matcher = SkillMatcher::new(&SkillVocabulary::builtin().unwrap());
        SkillGapAnalyzer::new(Arc::new(matcher), DisplayPolicy::default(), None)
    }

    fn posting(description: &str) -> JobPosting {
        JobPosting {
            job_id: "t_001".to_string(),
            title: "Backend Developer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            job_description: description.to_string(),
            external_url: String::new(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_analysis_reports_overlap_and_gaps() {
        let analysis = analyzer()
            .analyze(
                &posting("We need Python, Docker and AWS experience."),
                &strings(&["Python", "Rust"]),
            )
            .await;
        assert_eq!(analysis.matched_skills, vec!["Python"]);
        assert_eq!(analysis.missing_skills, vec!["aws", "docker"]);
        assert!(!analysis.matched_is_placeholder);
        assert!(!analysis.no_critical_gaps);
        assert!(matches!(analysis.improvement_suggestion, Suggestion::Fallback(_)));
    }

    #[tokio::test]
    async fn test_text_mentions_count_as_matches() {
        let analysis = analyzer()
            .analyze(
                &posting("Kafka pipelines in Python."),
                &strings(&["kafka", "python"]),
            )
            .await;
        assert_eq!(analysis.matched_skills, vec!["python", "kafka"]);
        assert!(analysis.no_critical_gaps);
        assert_eq!(analysis.missing_skills, vec![NO_GAPS_SENTINEL]);
    }

    #[tokio::test]
    async fn test_no_overlap_uses_placeholder() {
        let analysis = analyzer()
            .analyze(
                &posting("Terraform and Kubernetes."),
                &strings(&["figma", "sketch", "photoshop", "illustrator"]),
            )
            .await;
        assert!(analysis.matched_is_placeholder);
        assert_eq!(analysis.matched_skills, vec!["figma", "sketch", "photoshop"]);
        assert_eq!(analysis.missing_skills, vec!["kubernetes", "terraform"]);
        assert!(analysis
            .improvement_suggestion
            .text()
            .starts_with("You have a solid foundation with figma, sketch."));
    }
}
