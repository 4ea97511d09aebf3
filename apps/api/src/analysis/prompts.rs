// Prompt constants for improvement suggestions.

use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;

/// System prompt for suggestion generation. The plain-text rule is appended at call time.
pub const SUGGESTION_SYSTEM: &str = "You are a career advisor helping a job seeker \
    improve their profile for a specific job posting. Be concise, professional, \
    encouraging and realistic.";

/// Suggestion prompt. Replace `{job_title}`, `{candidate_skills}`,
/// `{matched_skills}` and `{missing_skills}` before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"Job Title: {job_title}

Candidate's Skills: {candidate_skills}
Matched Skills (skills they have that the job needs): {matched_skills}
Missing Skills (skills the job requires that they lack): {missing_skills}

Write a personalized, actionable and encouraging improvement suggestion for this candidate in 3-4 sentences. The suggestion should:
1. Acknowledge their strengths (matched skills)
2. Give specific, practical advice on developing the missing skills
3. Point to resources or learning paths (courses, projects, certifications)
4. Be motivating and realistic

Keep it focused on actionable next steps."#;

pub fn suggestion_system() -> String {
    format!("{SUGGESTION_SYSTEM} {PLAIN_TEXT_INSTRUCTION}")
}
