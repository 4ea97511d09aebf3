use serde::{Deserialize, Serialize};
use tracing::warn;

/// Roles a user can pick after uploading a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SoftwareEngineer,
    DataScientist,
    MachineLearningEngineer,
    FullStackDeveloper,
    BackendDeveloper,
    FrontendDeveloper,
    DevOpsEngineer,
    CloudArchitect,
    MobileDeveloper,
    QaEngineer,
    ProductManager,
    UiUxDesigner,
    DataEngineer,
    SecurityEngineer,
    SystemAdministrator,
}

impl Role {
    /// Every role, in the order shown to users.
    pub const ALL: [Role; 15] = [
        Role::SoftwareEngineer,
        Role::DataScientist,
        Role::MachineLearningEngineer,
        Role::FullStackDeveloper,
        Role::BackendDeveloper,
        Role::FrontendDeveloper,
        Role::DevOpsEngineer,
        Role::CloudArchitect,
        Role::MobileDeveloper,
        Role::QaEngineer,
        Role::ProductManager,
        Role::UiUxDesigner,
        Role::DataEngineer,
        Role::SecurityEngineer,
        Role::SystemAdministrator,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
            Role::DataScientist => "Data Scientist",
            Role::MachineLearningEngineer => "Machine Learning Engineer",
            Role::FullStackDeveloper => "Full Stack Developer",
            Role::BackendDeveloper => "Backend Developer",
            Role::FrontendDeveloper => "Frontend Developer",
            Role::DevOpsEngineer => "DevOps Engineer",
            Role::CloudArchitect => "Cloud Architect",
            Role::MobileDeveloper => "Mobile Developer",
            Role::QaEngineer => "QA Engineer",
            Role::ProductManager => "Product Manager",
            Role::UiUxDesigner => "UI/UX Designer",
            Role::DataEngineer => "Data Engineer",
            Role::SecurityEngineer => "Security Engineer",
            Role::SystemAdministrator => "System Administrator",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Role> {
        let name = name.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.display_name().eq_ignore_ascii_case(name))
    }

    /// Parses user-selected role names, dropping (and logging) unknown ones.
    /// Order is kept and repeats are removed.
    pub fn parse_all(names: &[String]) -> Vec<Role> {
        let mut roles = Vec::new();
        for name in names {
            match Role::from_name(name) {
                Some(role) if !roles.contains(&role) => roles.push(role),
                Some(_) => {}
                None => warn!("Ignoring unknown role '{name}'"),
            }
        }
        roles
    }

    pub fn display_names() -> Vec<String> {
        Role::ALL
            .iter()
            .map(|r| r.display_name().to_string())
            .collect()
    }
}

/// Experience bands offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    /// "1 to 2"
    Junior,
    /// "3 to 4"
    Mid,
    /// "above 5"
    Senior,
}

impl ExperienceLevel {
    /// Unrecognised values mean "no experience filter".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "1 to 2" => Some(ExperienceLevel::Junior),
            "3 to 4" => Some(ExperienceLevel::Mid),
            "above 5" => Some(ExperienceLevel::Senior),
            _ => None,
        }
    }
}

/// A single job listing as returned by a job source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_description: String,
    pub external_url: String,
}

/// What a job source is asked for.
#[derive(Debug, Clone)]
pub struct JobQuery {
    pub roles: Vec<Role>,
    /// Boolean search string for sources that take free-text queries.
    pub search_term: String,
    pub remote_only: bool,
    pub experience: Option<ExperienceLevel>,
}

impl JobQuery {
    pub fn new(role_names: &[String], skills: &[String], experience_level: &str, work_model: &str) -> Self {
        Self {
            roles: Role::parse_all(role_names),
            search_term: build_search_term(role_names, skills),
            remote_only: work_model.trim().eq_ignore_ascii_case("remote"),
            experience: ExperienceLevel::parse(experience_level),
        }
    }
}

/// `(role OR role) AND (skill OR skill)`, or whichever half is non-empty.
pub fn build_search_term(roles: &[String], skills: &[String]) -> String {
    let roles_query = roles.join(" OR ");
    let skills_query = skills.join(" OR ");

    match (roles_query.is_empty(), skills_query.is_empty()) {
        (false, false) => format!("({roles_query}) AND ({skills_query})"),
        (false, true) => roles_query,
        (true, false) => skills_query,
        (true, true) => String::new(),
    }
}
