//! Skill comparison — candidate skills vs job-required skills.
//!
//! `compare_skills` / `compare_with_posting` return the raw comparison. The
//! display view (`SkillGapView`) applies the presentation policy on top: caps,
//! the placeholder matched set and the "no gaps" sentinel. Callers that need the
//! true overlap must read the comparison, not the view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Shown as the single "missing" entry when the candidate covers every required skill.
pub const NO_GAPS_SENTINEL: &str = "No critical gaps identified";

/// Raw comparison result. Both lists are deduplicated case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    /// Candidate skills, in candidate order and casing, that the job asks for.
    pub matched: Vec<String>,
    /// Required skills, in required order, the candidate does not list.
    pub missing: Vec<String>,
}

/// Strict comparison by lowercase phrase equality.
pub fn compare_skills(candidate: &[String], required: &[String]) -> SkillComparison {
    let required_lower: HashSet<String> = required.iter().map(|s| s.to_lowercase()).collect();
    let candidate_lower: HashSet<String> = candidate.iter().map(|s| s.to_lowercase()).collect();

    let mut seen = HashSet::new();
    let matched = candidate
        .iter()
        .filter(|skill| {
            let lower = skill.to_lowercase();
            required_lower.contains(&lower) && seen.insert(lower)
        })
        .cloned()
        .collect();

    let mut seen = HashSet::new();
    let missing = required
        .iter()
        .filter(|skill| {
            let lower = skill.to_lowercase();
            !candidate_lower.contains(&lower) && seen.insert(lower)
        })
        .cloned()
        .collect();

    SkillComparison { matched, missing }
}

/// Comparison with the looser rule: a candidate skill also counts as matched when
/// its lowercase form appears anywhere in the job description text. This catches
/// skills the posting mentions that the vocabulary does not know about.
/// Strict matches keep their lead; text mentions are appended after them.
pub fn compare_with_posting(
    candidate: &[String],
    required: &[String],
    job_text: &str,
) -> SkillComparison {
    let mut result = compare_skills(candidate, required);
    let text = job_text.to_lowercase();

    let mut seen: HashSet<String> = result.matched.iter().map(|s| s.to_lowercase()).collect();
    for skill in candidate {
        let lower = skill.to_lowercase();
        if !lower.is_empty() && text.contains(lower.as_str()) && seen.insert(lower) {
            result.matched.push(skill.clone());
        }
    }

    result
}

/// Presentation limits for the display view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPolicy {
    /// Maximum entries shown per side.
    pub max_per_side: usize,
    /// Candidate skills shown as a placeholder when nothing matched.
    pub placeholder_count: usize,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            max_per_side: 8,
            placeholder_count: 3,
        }
    }
}

/// What the UI shows. Not a data guarantee: when `matched_is_placeholder` is set,
/// `matched` holds the candidate's leading skills rather than real matches, and
/// when `no_critical_gaps` is set, `missing` holds only [`NO_GAPS_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapView {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_is_placeholder: bool,
    pub no_critical_gaps: bool,
}

impl SkillComparison {
    pub fn to_view(&self, candidate: &[String], policy: &DisplayPolicy) -> SkillGapView {
        let matched_is_placeholder = self.matched.is_empty();
        let matched = if matched_is_placeholder {
            candidate
                .iter()
                .take(policy.placeholder_count.min(policy.max_per_side))
                .cloned()
                .collect()
        } else {
            self.matched.iter().take(policy.max_per_side).cloned().collect()
        };

        let no_critical_gaps = self.missing.is_empty();
        let missing = if no_critical_gaps {
            vec![NO_GAPS_SENTINEL.to_string()]
        } else {
            self.missing.iter().take(policy.max_per_side).cloned().collect()
        };

        SkillGapView {
            matched,
            missing,
            matched_is_placeholder,
            no_critical_gaps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_overlap_and_complement() {
        let result = compare_skills(&strings(&["python", "docker"]), &strings(&["python", "aws"]));
        assert_eq!(result.matched, vec!["python"]);
        assert_eq!(result.missing, vec!["aws"]);
    }

    #[test]
    fn test_matched_keeps_candidate_casing_and_order() {
        let result = compare_skills(
            &strings(&["Docker", "Python", "AWS"]),
            &strings(&["aws", "python"]),
        );
        assert_eq!(result.matched, vec!["Python", "AWS"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_missing_keeps_required_order() {
        let result = compare_skills(&strings(&["rust"]), &strings(&["terraform", "rust", "aws"]));
        assert_eq!(result.missing, vec!["terraform", "aws"]);
    }

    #[test]
    fn test_duplicates_collapsed_case_insensitively() {
        let result = compare_skills(
            &strings(&["Python", "python", "PYTHON"]),
            &strings(&["python", "go", "Go"]),
        );
        assert_eq!(result.matched, vec!["Python"]);
        assert_eq!(result.missing, vec!["go"]);
    }

    #[test]
    fn test_empty_inputs() {
        let result = compare_skills(&[], &[]);
        assert_eq!(result, SkillComparison::default());
    }

    #[test]
    fn test_posting_text_counts_as_match() {
        let job_text = "We use Kafka and Snowflake heavily alongside Python.";
        let result = compare_with_posting(
            &strings(&["Python", "Kafka", "Haskell"]),
            &strings(&["python"]),
            job_text,
        );
        assert_eq!(result.matched, vec!["Python", "Kafka"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_posting_rule_is_substring_not_token() {
        let result = compare_with_posting(&strings(&["go"]), &[], "Good communication skills");
        assert_eq!(result.matched, vec!["go"]);
    }

    #[test]
    fn test_posting_rule_does_not_affect_missing() {
        let result = compare_with_posting(
            &strings(&["docker"]),
            &strings(&["aws"]),
            "docker and aws",
        );
        assert_eq!(result.missing, vec!["aws"]);
    }

    #[test]
    fn test_view_caps_each_side() {
        let candidate: Vec<String> = (0..12).map(|i| format!("skill{i}")).collect();
        let comparison = SkillComparison {
            matched: candidate.clone(),
            missing: (0..12).map(|i| format!("gap{i}")).collect(),
        };
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        assert_eq!(view.matched.len(), 8);
        assert_eq!(view.missing.len(), 8);
        assert!(!view.matched_is_placeholder);
        assert!(!view.no_critical_gaps);
    }

    #[test]
    fn test_view_cap_is_configurable() {
        let candidate = strings(&["a", "b", "c", "d"]);
        let comparison = SkillComparison {
            matched: candidate.clone(),
            missing: strings(&["x", "y", "z"]),
        };
        let policy = DisplayPolicy {
            max_per_side: 2,
            placeholder_count: 3,
        };
        let view = comparison.to_view(&candidate, &policy);
        assert_eq!(view.matched, vec!["a", "b"]);
        assert_eq!(view.missing, vec!["x", "y"]);
    }

    #[test]
    fn test_view_placeholder_when_nothing_matched() {
        let candidate = strings(&["rust", "go", "zig", "c"]);
        let comparison = compare_skills(&candidate, &strings(&["aws"]));
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        assert!(view.matched_is_placeholder);
        assert_eq!(view.matched, vec!["rust", "go", "zig"]);
        assert_eq!(view.missing, vec!["aws"]);
    }

    #[test]
    fn test_view_sentinel_when_nothing_missing() {
        let candidate = strings(&["aws"]);
        let comparison = compare_skills(&candidate, &strings(&["aws"]));
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        assert!(view.no_critical_gaps);
        assert_eq!(view.missing, vec![NO_GAPS_SENTINEL]);
        assert_eq!(view.matched, vec!["aws"]);
    }

    #[test]
    fn test_view_placeholder_and_sentinel_together() {
        let candidate = strings(&["figma"]);
        let comparison = compare_skills(&candidate, &[]);
        let view = comparison.to_view(&candidate, &DisplayPolicy::default());
        assert!(view.matched_is_placeholder);
        assert!(view.no_critical_gaps);
        assert_eq!(view.matched, vec!["figma"]);
    }
}
