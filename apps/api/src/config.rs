use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::skills::DisplayPolicy;

const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Unset means suggestions always come from the rule-based fallback.
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    /// Overrides the Messages endpoint, e.g. for a proxy.
    pub llm_api_url: Option<String>,
    pub llm_max_attempts: u32,
    pub skill_vocabulary_path: Option<PathBuf>,
    pub display_policy: DisplayPolicy,
    pub job_results_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_api_url: optional_env("LLM_API_URL"),
            llm_max_attempts: parse_env("LLM_MAX_ATTEMPTS", 3)?,
            skill_vocabulary_path: optional_env("SKILL_VOCABULARY_PATH").map(PathBuf::from),
            display_policy: DisplayPolicy {
                max_per_side: parse_env("SKILL_DISPLAY_LIMIT", 8)?,
                placeholder_count: parse_env("SKILL_PLACEHOLDER_COUNT", 3)?,
            },
            job_results_limit: parse_env("JOB_RESULTS_LIMIT", 5)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            llm_model: DEFAULT_MODEL.to_string(),
            llm_api_url: None,
            llm_max_attempts: 3,
            skill_vocabulary_path: None,
            display_policy: DisplayPolicy::default(),
            job_results_limit: 5,
        }
    }
}

/// Unset and blank values are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
