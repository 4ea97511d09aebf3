use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::SkillGapAnalyzer;
use crate::config::Config;
use crate::jobs::{JobFilter, JobSource, MockJobBoard};
use crate::llm_client::LlmClient;
use crate::skills::{SkillMatcher, SkillVocabulary};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once, before the listener binds, and is read-only after.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<SkillMatcher>,
    pub analyzer: SkillGapAnalyzer,
    /// Pluggable job source. Default: the built-in mock board.
    pub jobs: Arc<dyn JobSource>,
    pub job_filter: Arc<JobFilter>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = match &config.skill_vocabulary_path {
            Some(path) => SkillVocabulary::from_file(path)?,
            None => SkillVocabulary::builtin().context("Built-in skill vocabulary is invalid")?,
        };
        let matcher = Arc::new(SkillMatcher::new(&vocabulary));
        info!("Skill matcher ready ({} phrases)", matcher.phrase_count());

        let llm = match &config.anthropic_api_key {
            Some(key) => {
                let mut client = LlmClient::new(key.clone(), config.llm_model.clone())
                    .context("Failed to build LLM client")?
                    .with_max_attempts(config.llm_max_attempts);
                if let Some(url) = &config.llm_api_url {
                    client = client.with_endpoint(url.clone());
                }
                info!("LLM client initialized (model: {})", client.model());
                Some(client)
            }
            None => {
                info!("ANTHROPIC_API_KEY not set; suggestions will be rule-based");
                None
            }
        };

        let job_filter = JobFilter::new(config.job_results_limit)
            .context("Failed to compile experience filters")?;

        Ok(Self {
            analyzer: SkillGapAnalyzer::new(Arc::clone(&matcher), config.display_policy, llm),
            matcher,
            jobs: Arc::new(MockJobBoard),
            job_filter: Arc::new(job_filter),
        })
    }
}
