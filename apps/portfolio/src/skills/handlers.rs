use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::input::SkillInput;
use super::store;
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::models::skill::Skill;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Skill {id} not found"))
}

/// GET /api/v1/admin/skills
pub async fn handle_list_skills(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /api/v1/admin/skills/:id
pub async fn handle_get_skill(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Skill>, AppError> {
    let skill = store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(skill))
}

/// POST /api/v1/admin/skills
pub async fn handle_create_skill(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SkillInput>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    input.validate()?;
    let skill = store::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/v1/admin/skills/:id
pub async fn handle_update_skill(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<SkillInput>,
) -> Result<Json<Skill>, AppError> {
    input.validate()?;
    let skill = store::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(skill))
}

/// DELETE /api/v1/admin/skills/:id
pub async fn handle_delete_skill(
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
