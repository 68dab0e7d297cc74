use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::input::{CertificationInput, EducationInput};
use super::store;
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::models::education::{Certification, Education};
use crate::state::AppState;

fn education_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Education {id} not found"))
}

fn certification_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Certification {id} not found"))
}

// ── Education ────────────────────────────────────────────────────────────────

/// GET /api/v1/admin/education
pub async fn handle_list_education(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Education>>, AppError> {
    Ok(Json(store::list_education(&state.db).await?))
}

/// GET /api/v1/admin/education/:id
pub async fn handle_get_education(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Education>, AppError> {
    let row = store::get_education(&state.db, id)
        .await?
        .ok_or_else(|| education_not_found(id))?;
    Ok(Json(row))
}

/// POST /api/v1/admin/education
pub async fn handle_create_education(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<EducationInput>,
) -> Result<(StatusCode, Json<Education>), AppError> {
    input.validate()?;
    let row = store::create_education(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/admin/education/:id
pub async fn handle_update_education(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<EducationInput>,
) -> Result<Json<Education>, AppError> {
    input.validate()?;
    let row = store::update_education(&state.db, id, &input)
        .await?
        .ok_or_else(|| education_not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/admin/education/:id
pub async fn handle_delete_education(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete_education(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(education_not_found(id))
    }
}

// ── Certifications ───────────────────────────────────────────────────────────

/// GET /api/v1/admin/certifications
pub async fn handle_list_certifications(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Certification>>, AppError> {
    Ok(Json(store::list_certifications(&state.db).await?))
}

/// GET /api/v1/admin/certifications/:id
pub async fn handle_get_certification(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Certification>, AppError> {
    let row = store::get_certification(&state.db, id)
        .await?
        .ok_or_else(|| certification_not_found(id))?;
    Ok(Json(row))
}

/// POST /api/v1/admin/certifications
pub async fn handle_create_certification(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CertificationInput>,
) -> Result<(StatusCode, Json<Certification>), AppError> {
    input.validate()?;
    let row = store::create_certification(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/admin/certifications/:id
pub async fn handle_update_certification(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<CertificationInput>,
) -> Result<Json<Certification>, AppError> {
    input.validate()?;
    let row = store::update_certification(&state.db, id, &input)
        .await?
        .ok_or_else(|| certification_not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/admin/certifications/:id
pub async fn handle_delete_certification(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete_certification(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(certification_not_found(id))
    }
}
