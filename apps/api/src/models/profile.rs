use serde::{Deserialize, Serialize};

/// Result of resume analysis: recognised skills plus the roles the user can search for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSkillProfile {
    pub extracted_skills: Vec<String>,
    pub available_roles: Vec<String>,
}
