//! Axum route handlers for job search and analysis.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::jobs::JobQuery;
use crate::models::search::{JobResult, JobSearchParams};
use crate::state::AppState;

/// POST /api/v1/search_and_analyze
///
/// Fetches postings for the selected roles, filters them by experience level and
/// analyses each one against the user's skills. No postings is an empty list,
/// not an error.
pub async fn handle_search_and_analyze(
    State(state): State<AppState>,
    Json(params): Json<JobSearchParams>,
) -> Result<Json<Vec<JobResult>>, AppError> {
    if params.user_skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("User skills cannot be empty".to_string()));
    }
    if params.selected_roles.iter().all(|r| r.trim().is_empty()) {
        return Err(AppError::Validation(
            "At least one role must be selected".to_string(),
        ));
    }

    let query = JobQuery::new(
        &params.selected_roles,
        &params.user_skills,
        &params.experience_level,
        &params.work_model,
    );
    info!(
        "Searching '{}' via {} source (remote_only={}, experience={:?})",
        query.search_term,
        state.jobs.name(),
        query.remote_only,
        query.experience
    );

    let postings = state
        .jobs
        .fetch(&query)
        .await
        .map_err(|e| AppError::JobSource(e.to_string()))?;
    let fetched = postings.len();
    let postings = state.job_filter.apply(postings, query.experience);
    info!("Kept {} of {} postings after filtering", postings.len(), fetched);

    let total = postings.len();
    let mut results = Vec::with_capacity(total);
    for (idx, posting) in postings.into_iter().enumerate() {
        info!("Analyzing job {}/{}: {}", idx + 1, total, posting.title);
        let analysis = state.analyzer.analyze(&posting, &params.user_skills).await;
        if !analysis.improvement_suggestion.is_generated() {
            debug!(
                "Job {} analysed with fallback suggestion: {}",
                posting.job_id,
                analysis.improvement_suggestion.text()
            );
        }
        results.push(JobResult {
            job_details: posting,
            analysis,
        });
    }

    Ok(Json(results))
}
