use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use super::input::{TestimonialInput, TestimonialSubmission};
use super::store;
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::models::testimonial::Testimonial;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Testimonial {id} not found"))
}

/// POST /api/v1/testimonials
///
/// Public submission. The stored row always awaits moderation.
pub async fn handle_submit_testimonial(
    State(state): State<AppState>,
    JsonBody(submission): JsonBody<TestimonialSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    submission.validate()?;
    let row = store::create(&state.db, &submission.into_pending()).await?;
    info!("Testimonial {} submitted by '{}' (pending review)", row.id, row.author);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Thank you for your testimonial! It will be reviewed and published soon.",
            "id": row.id,
        })),
    ))
}

/// GET /api/v1/admin/testimonials
pub async fn handle_list_testimonials(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /api/v1/admin/testimonials/:id
pub async fn handle_get_testimonial(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Testimonial>, AppError> {
    let row = store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// POST /api/v1/admin/testimonials
pub async fn handle_create_testimonial(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TestimonialInput>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    input.validate()?;
    let row = store::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/admin/testimonials/:id
pub async fn handle_update_testimonial(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<TestimonialInput>,
) -> Result<Json<Testimonial>, AppError> {
    input.validate()?;
    let row = store::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/admin/testimonials/:id
pub async fn handle_delete_testimonial(
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
