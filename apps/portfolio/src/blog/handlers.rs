use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::input::BlogPostInput;
use super::{store, PER_PAGE};
use crate::auth::AdminUser;
use crate::db::{or_default, table_exists};
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::models::blog::{BlogPost, BlogPostView};
use crate::pages::{with_site, PageContext};
use crate::pagination::{PageQuery, PageWindow, Paginated};
use crate::slug::resolve_slug;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Blog post {id} not found"))
}

#[derive(Debug, Serialize)]
pub struct BlogList {
    pub posts: Paginated<BlogPostView>,
}

#[derive(Debug, Serialize)]
pub struct BlogPage {
    pub post: BlogPostView,
}

/// GET /api/v1/blog?page=
pub async fn handle_list_posts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageContext<BlogList>>, AppError> {
    let db = &state.db;
    let total = or_default(db, store::TABLE, store::count_visible(db)).await;
    let window = PageWindow::resolve(query.page, PER_PAGE, total)?;
    let rows = or_default(
        db,
        store::TABLE,
        store::list_visible(db, window.per_page, window.offset()),
    )
    .await;

    let posts = rows
        .into_iter()
        .map(|p| BlogPostView::new(p, state.media.as_ref()))
        .collect();
    let body = BlogList {
        posts: window.into_page(posts),
    };
    Ok(Json(with_site(&state, body).await))
}

/// GET /api/v1/blog/:slug
///
/// Each successful read counts as one view.
pub async fn handle_post_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageContext<BlogPage>>, AppError> {
    let missing = || AppError::NotFound(format!("No published post '{slug}'"));
    if !table_exists(&state.db, store::TABLE).await {
        return Err(missing());
    }

    let post = store::record_view(&state.db, &slug)
        .await?
        .ok_or_else(missing)?;
    let body = BlogPage {
        post: BlogPostView::new(post, state.media.as_ref()),
    };
    Ok(Json(with_site(&state, body).await))
}

/// GET /api/v1/admin/blog
pub async fn handle_admin_list_posts(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /api/v1/admin/blog/:id
pub async fn handle_admin_get_post(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, AppError> {
    let post = store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// POST /api/v1/admin/blog
pub async fn handle_create_post(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BlogPostInput>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let post = store::create(&state.db, &input, &slug).await?;
    info!("Blog post '{}' created as /{}", post.title, post.slug);
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/v1/admin/blog/:id
pub async fn handle_update_post(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(input): JsonBody<BlogPostInput>,
) -> Result<Json<BlogPost>, AppError> {
    input.validate()?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let post = store::update(&state.db, id, &input, &slug)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// DELETE /api/v1/admin/blog/:id
pub async fn handle_delete_post(
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
