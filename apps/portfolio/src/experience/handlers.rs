use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::input::ExperienceInput;
use super::store;
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::models::experience::Experience;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Experience {id} not found"))
}

/// GET /api/v1/admin/experience
pub async fn handle_list_experience(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /api/v1/admin/experience/:id
pub async fn handle_get_experience(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Experience>, AppError> {
    let row = store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/v1/admin/experience
pub async fn handle_create_experience(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ExperienceInput>,
) -> Result<(StatusCode, Json<Experience>), AppError> {
    input.validate()?;
    let row = store::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/admin/experience/:id
pub async fn handle_update_experience(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<ExperienceInput>,
) -> Result<Json<Experience>, AppError> {
    input.validate()?;
    let row = store::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/admin/experience/:id
pub async fn handle_delete_experience(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
