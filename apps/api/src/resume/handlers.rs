//! Axum route handlers for resume upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::Role;
use crate::models::profile::UserSkillProfile;
use crate::resume::pdf::extract_text;
use crate::skills::SkillMatcher;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume_file";

struct ResumeUpload {
    filename: String,
    data: Bytes,
}

/// POST /api/v1/analyze_resume
///
/// Accepts a multipart PDF upload, extracts its text and returns the recognised
/// skills together with the roles available for the job search.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UserSkillProfile>, AppError> {
    let upload = read_resume_field(&mut multipart).await?;
    info!("Processing resume: {} ({} bytes)", upload.filename, upload.data.len());

    if !upload.filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("Only PDF files are supported".to_string()));
    }

    let text = extract_text(upload.data.to_vec()).await?;
    info!("Extracted {} characters from resume", text.len());

    let profile = profile_from_text(&state.matcher, &text)?;
    info!(
        "Extracted {} skills: {:?}",
        profile.extracted_skills.len(),
        profile.extracted_skills
    );

    Ok(Json(profile))
}

/// Turns extracted resume text into a skill profile. Blank text and text with no
/// recognised skills are both client errors.
fn profile_from_text(matcher: &SkillMatcher, text: &str) -> Result<UserSkillProfile, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF. Please ensure the file is not corrupted or encrypted."
                .to_string(),
        ));
    }

    let extracted_skills = matcher.extract_skills(text);
    if extracted_skills.is_empty() {
        return Err(AppError::Validation(
            "Could not identify any recognizable skills in the resume. \
             Please ensure your resume includes technical skills."
                .to_string(),
        ));
    }

    Ok(UserSkillProfile {
        extracted_skills,
        available_roles: Role::display_names(),
    })
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(ResumeUpload { filename, data });
    }

    Err(AppError::Validation(format!("Missing '{RESUME_FIELD}' file field")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillVocabulary;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(&SkillVocabulary::builtin().unwrap())
    }

    #[test]
    fn test_profile_lists_skills_and_roles() {
        let profile = profile_from_text(&matcher(), "Backend work in Rust, PostgreSQL and Docker.").unwrap();
        assert_eq!(profile.extracted_skills, vec!["docker", "postgresql", "rust"]);
        assert_eq!(profile.available_roles, Role::display_names());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let err = profile_from_text(&matcher(), " \n\t ").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("Could not extract text")));
    }

    #[test]
    fn test_text_without_skills_is_rejected() {
        let err = profile_from_text(&matcher(), "Enjoys hiking and baking bread.").unwrap_err();
        assert!(
            matches!(err, AppError::Validation(msg) if msg.starts_with("Could not identify any recognizable skills"))
        );
    }
}
