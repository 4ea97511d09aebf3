use serde::{Deserialize, Serialize};

use crate::analysis::SkillAnalysis;
use crate::jobs::JobPosting;

/// Body of `POST /api/v1/search_and_analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchParams {
    pub user_skills: Vec<String>,
    pub selected_roles: Vec<String>,
    /// "1 to 2", "3 to 4" or "above 5"; anything else disables the experience filter.
    #[serde(default)]
    pub experience_level: String,
    /// "Remote", "Onsite" or "Hybrid".
    #[serde(default)]
    pub work_model: String,
}

/// One posting with its analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
    pub job_details: JobPosting,
    pub analysis: SkillAnalysis,
}
