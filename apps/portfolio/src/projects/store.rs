use sqlx::PgPool;
use uuid::Uuid;

use super::input::{ProjectImageInput, ProjectInput};
use crate::models::project::{Project, ProjectImage};

pub const TABLE: &str = "projects";
pub const IMAGES_TABLE: &str = "project_images";

const PUBLIC_ORDER: &str = "ORDER BY is_featured DESC, display_order, created_at DESC";

pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE is_published")
        .fetch_one(pool)
        .await
}

pub async fn list_published(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!(
        "SELECT * FROM projects WHERE is_published {PUBLIC_ORDER} LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Newest featured, published projects for the landing page.
pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT * FROM projects
        WHERE is_published AND is_featured
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_published_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE slug = $1 AND is_published")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(&format!("SELECT * FROM projects {PUBLIC_ORDER}"))
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    input: &ProjectInput,
    slug: &str,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects
            (title, slug, short_description, description, thumbnail, featured_image,
             status, technologies, github_url, live_url, is_featured, is_published,
             display_order, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(input.title.trim())
    .bind(slug)
    .bind(&input.short_description)
    .bind(&input.description)
    .bind(&input.thumbnail)
    .bind(&input.featured_image)
    .bind(input.status.as_str())
    .bind(&input.technologies)
    .bind(&input.github_url)
    .bind(&input.live_url)
    .bind(input.is_featured)
    .bind(input.is_published)
    .bind(input.display_order)
    .bind(input.start_date)
    .bind(input.end_date)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &ProjectInput,
    slug: &str,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET title = $2, slug = $3, short_description = $4, description = $5,
            thumbnail = $6, featured_image = $7, status = $8, technologies = $9,
            github_url = $10, live_url = $11, is_featured = $12, is_published = $13,
            display_order = $14, start_date = $15, end_date = $16, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.title.trim())
    .bind(slug)
    .bind(&input.short_description)
    .bind(&input.description)
    .bind(&input.thumbnail)
    .bind(&input.featured_image)
    .bind(input.status.as_str())
    .bind(&input.technologies)
    .bind(&input.github_url)
    .bind(&input.live_url)
    .bind(input.is_featured)
    .bind(input.is_published)
    .bind(input.display_order)
    .bind(input.start_date)
    .bind(input.end_date)
    .fetch_optional(pool)
    .await
}

/// Deletes a project; its gallery rows cascade.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_images(pool: &PgPool, project_id: Uuid) -> Result<Vec<ProjectImage>, sqlx::Error> {
    sqlx::query_as::<_, ProjectImage>(
        "SELECT * FROM project_images WHERE project_id = $1 ORDER BY display_order, created_at",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn add_image(
    pool: &PgPool,
    project_id: Uuid,
    input: &ProjectImageInput,
) -> Result<ProjectImage, sqlx::Error> {
    sqlx::query_as::<_, ProjectImage>(
        r#"
        INSERT INTO project_images (project_id, image, caption, display_order)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(project_id)
    .bind(&input.image)
    .bind(&input.caption)
    .bind(input.display_order)
    .fetch_one(pool)
    .await
}

pub async fn update_image(
    pool: &PgPool,
    id: Uuid,
    input: &ProjectImageInput,
) -> Result<Option<ProjectImage>, sqlx::Error> {
    sqlx::query_as::<_, ProjectImage>(
        r#"
        UPDATE project_images
        SET image = $2, caption = $3, display_order = $4, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.image)
    .bind(&input.caption)
    .bind(input.display_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete_image(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM project_images WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
