//! Improvement suggestions — LLM-generated when possible, rule-based otherwise.
//!
//! The two sources are distinct variants so callers always know which one they got.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::prompts::{suggestion_system, SUGGESTION_PROMPT_TEMPLATE};
use crate::llm_client::LlmClient;
use crate::skills::{SkillComparison, SkillGapView};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "text", rename_all = "snake_case")]
pub enum Suggestion {
    /// Written by the LLM.
    Generated(String),
    /// Assembled from the comparison because no LLM is configured or the call failed.
    Fallback(String),
}

impl Suggestion {
    pub fn text(&self) -> &str {
        match self {
            Suggestion::Generated(text) | Suggestion::Fallback(text) => text,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Suggestion::Generated(_))
    }
}

/// Everything a suggestion is based on.
pub struct SuggestionInput<'a> {
    pub job_title: &'a str,
    pub candidate_skills: &'a [String],
    pub comparison: &'a SkillComparison,
    pub view: &'a SkillGapView,
}

pub async fn suggest(llm: Option<&LlmClient>, input: &SuggestionInput<'_>) -> Suggestion {
    match llm {
        Some(llm) => match llm.complete(&build_prompt(input), &suggestion_system()).await {
            Ok(text) => {
                debug!("Generated suggestion ({} chars)", text.len());
                return Suggestion::Generated(text);
            }
            Err(e) => warn!("Suggestion generation failed, using fallback: {e}"),
        },
        None => debug!("No LLM configured, using fallback suggestion"),
    }

    Suggestion::Fallback(fallback_suggestion(input.candidate_skills, input.comparison))
}

fn build_prompt(input: &SuggestionInput<'_>) -> String {
    let job_title = match input.job_title.trim() {
        "" => "this position",
        title => title,
    };
    // Placeholder and sentinel entries are display filler, not findings.
    let matched = if input.view.matched_is_placeholder {
        "None".to_string()
    } else {
        input.view.matched.join(", ")
    };
    let missing = if input.view.no_critical_gaps {
        "None".to_string()
    } else {
        input.view.missing.join(", ")
    };

    SUGGESTION_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{candidate_skills}", &input.candidate_skills.join(", "))
        .replace("{matched_skills}", &matched)
        .replace("{missing_skills}", &missing)
}

/// Rule-based suggestion built from the uncapped comparison.
pub fn fallback_suggestion(candidate_skills: &[String], comparison: &SkillComparison) -> String {
    let mut suggestion = if comparison.matched.is_empty() {
        let strengths = if candidate_skills.len() >= 2 {
            candidate_skills[..2].join(", ")
        } else {
            "your skills".to_string()
        };
        format!("You have a solid foundation with {strengths}. ")
    } else {
        let strengths = leading(&comparison.matched, 3);
        format!("Great match! Your expertise in {strengths} aligns well with this role. ")
    };

    if comparison.missing.is_empty() {
        suggestion.push_str(
            "Your skill set is comprehensive for this position. \
             Highlight relevant project experience in your application.",
        );
    } else {
        let gaps = leading(&comparison.missing, 3);
        suggestion.push_str(&format!(
            "To strengthen your application, consider developing skills in {gaps}. \
             Focus on hands-on projects or certifications in these areas to stand out."
        ));
    }

    suggestion
}

fn leading(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::compare::compare_skills;
    use crate::skills::DisplayPolicy;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fallback_with_matches_and_gaps() {
        let candidate = strings(&["python", "docker", "git", "sql"]);
        let comparison = SkillComparison {
            matched: candidate.clone(),
            missing: strings(&["aws", "kubernetes", "terraform", "ansible"]),
        };
        let text = fallback_suggestion(&candidate, &comparison);
        assert!(text.starts_with("Great match! Your expertise in python, docker, git aligns"));
        assert!(text.contains("developing skills in aws, kubernetes, terraform."));
        assert!(!text.contains("ansible"));
        assert!(!text.contains("sql"));
    }

    #[test]
    fn test_fallback_without_matches_names_two_skills() {
        let candidate = strings(&["figma", "sketch", "photoshop"]);
        let comparison = compare_skills(&candidate, &strings(&["react"]));
        let text = fallback_suggestion(&candidate, &comparison);
        assert!(text.starts_with("You have a solid foundation with figma, sketch. "));
    }

    #[test]
    fn test_fallback_single_skill_uses_generic_phrase() {
        let candidate = strings(&["figma"]);
        let comparison = compare_skills(&candidate, &strings(&["react"]));
        let text = fallback_suggestion(&candidate, &comparison);
        assert!(text.starts_with("You have a solid foundation with your skills. "));
    }

    #[test]
    fn test_fallback_without_gaps() {
        let candidate = strings(&["aws"]);
        let comparison = compare_skills(&candidate, &strings(&["aws"]));
        let text = fallback_suggestion(&candidate, &comparison);
        assert!(text.contains("Your skill set is comprehensive for this position."));
    }

    #[test]
    fn test_prompt_hides_placeholder_and_sentinel() {
        let candidate = strings(&["figma", "sketch"]);
        let comparison = compare_skills(&candidate, &[]);
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        let prompt = build_prompt(&SuggestionInput {
            job_title: "",
            candidate_skills: &candidate,
            comparison: &comparison,
            view: &view,
        });
        assert!(prompt.contains("Job Title: this position"));
        assert!(prompt.contains("Candidate's Skills: figma, sketch"));
        assert!(prompt.contains("Matched Skills (skills they have that the job needs): None"));
        assert!(prompt.contains("Missing Skills (skills the job requires that they lack): None"));
    }

    #[test]
    fn test_prompt_lists_real_findings() {
        let candidate = strings(&["python", "docker"]);
        let comparison = compare_skills(&candidate, &strings(&["python", "aws"]));
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        let prompt = build_prompt(&SuggestionInput {
            job_title: "Backend Developer",
            candidate_skills: &candidate,
            comparison: &comparison,
            view: &view,
        });
        assert!(prompt.contains("Job Title: Backend Developer"));
        assert!(prompt.contains("job needs): python"));
        assert!(prompt.contains("they lack): aws"));
    }

    #[tokio::test]
    async fn test_without_llm_returns_fallback() {
        let candidate = strings(&["python"]);
        let comparison = compare_skills(&candidate, &strings(&["python"]));
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        let suggestion = suggest(
            None,
            &SuggestionInput {
                job_title: "Engineer",
                candidate_skills: &candidate,
                comparison: &comparison,
                view: &view,
            },
        )
        .await;
        assert!(!suggestion.is_generated());
        assert!(suggestion.text().starts_with("Great match!"));
    }

    #[tokio::test]
    async fn test_failed_llm_call_returns_fallback() {
        let llm = LlmClient::new("key".to_string(), "model".to_string())
            .unwrap()
            .with_endpoint("http://127.0.0.1:9/v1/messages")
            .with_max_attempts(1);
        let candidate = strings(&["python"]);
        let comparison = compare_skills(&candidate, &strings(&["aws"]));
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        let suggestion = suggest(
            Some(&llm),
            &SuggestionInput {
                job_title: "Engineer",
                candidate_skills: &candidate,
                comparison: &comparison,
                view: &view,
            },
        )
        .await;
        assert!(matches!(suggestion, Suggestion::Fallback(_)));
    }

    #[test]
    fn test_suggestion_serializes_with_source_tag() {
        let value = serde_json::to_value(Suggestion::Fallback("text".to_string())).unwrap();
        assert_eq!(value["source"], "fallback");
        assert_eq!(value["text"], "text");

        let value = serde_json::to_value(Suggestion::Generated("g".to_string())).unwrap();
        assert_eq!(value["source"], "generated");
    }
}
