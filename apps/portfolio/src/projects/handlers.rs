use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::input::{ProjectImageInput, ProjectInput};
use super::{store, PER_PAGE};
use crate::auth::AdminUser;
use crate::db::{or_default, table_exists};
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::models::project::{Project, ProjectDetail, ProjectImage, ProjectImageView, ProjectView};
use crate::pages::{with_site, PageContext};
use crate::pagination::{PageQuery, PageWindow, Paginated};
use crate::slug::resolve_slug;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Project {id} not found"))
}

#[derive(Debug, Serialize)]
pub struct ProjectList {
    pub projects: Paginated<ProjectView>,
}

#[derive(Debug, Serialize)]
pub struct ProjectPage {
    pub project: ProjectDetail,
}

/// GET /api/v1/projects?page=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageContext<ProjectList>>, AppError> {
    let db = &state.db;
    let total = or_default(db, store::TABLE, store::count_published(db)).await;
    let window = PageWindow::resolve(query.page, PER_PAGE, total)?;
    let rows = or_default(
        db,
        store::TABLE,
        store::list_published(db, window.per_page, window.offset()),
    )
    .await;

    let projects = rows
        .into_iter()
        .map(|p| ProjectView::new(p, state.media.as_ref()))
        .collect();
    let body = ProjectList {
        projects: window.into_page(projects),
    };
    Ok(Json(with_site(&state, body).await))
}

/// GET /api/v1/projects/:slug
pub async fn handle_project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageContext<ProjectPage>>, AppError> {
    let db = &state.db;
    let missing = || AppError::NotFound(format!("No published project '{slug}'"));
    if !table_exists(db, store::TABLE).await {
        return Err(missing());
    }

    let project = store::get_published_by_slug(db, &slug)
        .await?
        .ok_or_else(missing)?;
    let images = or_default(db, store::IMAGES_TABLE, store::list_images(db, project.id)).await;

    let media = state.media.as_ref();
    let detail = ProjectDetail {
        project: ProjectView::new(project, media),
        images: images
            .into_iter()
            .map(|img| ProjectImageView::new(img, media))
            .collect(),
    };
    Ok(Json(with_site(&state, ProjectPage { project: detail }).await))
}

/// GET /api/v1/admin/projects
pub async fn handle_admin_list_projects(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /api/v1/admin/projects/:id
pub async fn handle_admin_get_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// POST /api/v1/admin/projects
pub async fn handle_create_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let project = store::create(&state.db, &input, &slug).await?;
    info!("Project '{}' created as /{}", project.title, project.slug);
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/admin/projects/:id
pub async fn handle_update_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> Result<Json<Project>, AppError> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let project = store::update(&state.db, id, &input, &slug)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/:id
pub async fn handle_delete_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete(&state.db, id).await? {
        info!("Project {id} deleted with its gallery");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/admin/projects/:id/images
pub async fn handle_list_project_images(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ProjectImage>>, AppError> {
    store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(store::list_images(&state.db, id).await?))
}

/// POST /api/v1/admin/projects/:id/images
pub async fn handle_add_project_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<ProjectImageInput>,
) -> Result<(StatusCode, Json<ProjectImage>), AppError> {
    input.validate()?;
    store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    let image = store::add_image(&state.db, id, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/v1/admin/project-images/:id
pub async fn handle_update_project_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<ProjectImageInput>,
) -> Result<Json<ProjectImage>, AppError> {
    input.validate()?;
    let image = store::update_image(&state.db, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project image {id} not found")))?;
    Ok(Json(image))
}

/// DELETE /api/v1/admin/project-images/:id
pub async fn handle_delete_project_image(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete_image(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Project image {id} not found")))
    }
}
