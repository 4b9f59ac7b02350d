//! Axum route handlers for the session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::composer::{compose_prompt, StyleRequest};
use crate::models::profile::{
    EducationEntry, ExperienceEntry, Profile, ProfileBasics, ProjectEntry,
};
use crate::publish::publisher::PublishResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct PromptPreviewResponse {
    pub prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session_id = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            profile: Profile::new(),
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.snapshot(id).await?;
    Ok(Json(SessionResponse {
        session_id: id,
        profile: session.profile,
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/basics
pub async fn handle_set_basics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(basics): Json<ProfileBasics>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .sessions
        .update(id, |s| {
            s.profile.set_basics(basics);
            s.profile.clone()
        })
        .await?;
    Ok(Json(profile))
}

/// POST /api/v1/sessions/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<ExperienceEntry>,
) -> Result<Json<Vec<ExperienceEntry>>, AppError> {
    let entries = state
        .sessions
        .update(id, |s| {
            s.profile.add_experience(entry);
            s.profile.experience.clone()
        })
        .await?;
    Ok(Json(entries))
}

/// DELETE /api/v1/sessions/:id/experience
pub async fn handle_clear_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |s| s.profile.clear_experience())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<EducationEntry>,
) -> Result<Json<Vec<EducationEntry>>, AppError> {
    let entries = state
        .sessions
        .update(id, |s| {
            s.profile.add_education(entry);
            s.profile.education.clone()
        })
        .await?;
    Ok(Json(entries))
}

/// DELETE /api/v1/sessions/:id/education
pub async fn handle_clear_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |s| s.profile.clear_education())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(entry): Json<ProjectEntry>,
) -> Result<Json<Vec<ProjectEntry>>, AppError> {
    let entries = state
        .sessions
        .update(id, |s| {
            s.profile.add_project(entry);
            s.profile.projects.clone()
        })
        .await?;
    Ok(Json(entries))
}

/// DELETE /api/v1/sessions/:id/projects
pub async fn handle_clear_projects(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |s| s.profile.clear_projects())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/prompt
///
/// Returns the prompt that publishing would send, without calling anything.
pub async fn handle_preview_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StyleRequest>,
) -> Result<Json<PromptPreviewResponse>, AppError> {
    let style = request.resolve()?;
    let session = state.sessions.snapshot(id).await?;
    Ok(Json(PromptPreviewResponse {
        prompt: compose_prompt(&session.profile, &style),
    }))
}

/// POST /api/v1/sessions/:id/publish
///
/// Full pipeline: compose → generate → publish. The slug is reserved in the
/// session up front; the pipeline then runs on a snapshot of the profile.
pub async fn handle_publish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StyleRequest>,
) -> Result<Json<PublishResult>, AppError> {
    let style = request.resolve()?;
    let (profile, slug) = state
        .sessions
        .update(id, |s| (s.profile.clone(), s.reserve_slug()))
        .await?;

    let result = state
        .builder
        .build(&profile, &style, slug.as_deref())
        .await?;

    tracing::info!(
        "Session {id} published {} bytes to {}",
        result.content.len(),
        result.url
    );

    Ok(Json(result))
}
