use sqlx::PgPool;
use uuid::Uuid;

use super::input::BlogPostInput;
use crate::models::blog::BlogPost;

pub const TABLE: &str = "blog_posts";

// A post is public once published and its date has arrived.
const VISIBLE: &str = "is_published AND published_date <= now()";
const ORDER: &str = "ORDER BY display_order, published_date DESC";

pub async fn count_visible(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM blog_posts WHERE {VISIBLE}"))
        .fetch_one(pool)
        .await
}

pub async fn list_visible(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(&format!(
        "SELECT * FROM blog_posts WHERE {VISIBLE} {ORDER} LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(&format!(
        "SELECT * FROM blog_posts WHERE {VISIBLE} AND is_featured {ORDER} LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Fetches a visible post and counts the view in the same statement.
pub async fn record_view(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(&format!(
        "UPDATE blog_posts SET views = views + 1 WHERE slug = $1 AND {VISIBLE} RETURNING *"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(&format!("SELECT * FROM blog_posts {ORDER}"))
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    input: &BlogPostInput,
    slug: &str,
) -> Result<BlogPost, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts
            (title, slug, excerpt, content, cover_image, external_url, platform_name,
             author, published_date, is_published, is_featured, tags, read_time,
             display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, now()), $10, $11, $12, $13,
                $14)
        RETURNING *
        "#,
    )
    .bind(input.title.trim())
    .bind(slug)
    .bind(&input.excerpt)
    .bind(&input.content)
    .bind(&input.cover_image)
    .bind(&input.external_url)
    .bind(&input.platform_name)
    .bind(&input.author)
    .bind(input.published_date)
    .bind(input.is_published)
    .bind(input.is_featured)
    .bind(&input.tags)
    .bind(input.read_time)
    .bind(input.display_order)
    .fetch_one(pool)
    .await
}

/// Updates editable fields. `views` is left alone, and so is the publish
/// date unless one is given.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &BlogPostInput,
    slug: &str,
) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        UPDATE blog_posts
        SET title = $2, slug = $3, excerpt = $4, content = $5, cover_image = $6,
            external_url = $7, platform_name = $8, author = $9,
            published_date = COALESCE($10, published_date),
            is_published = $11, is_featured = $12, tags = $13, read_time = $14,
            display_order = $15, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.title.trim())
    .bind(slug)
    .bind(&input.excerpt)
    .bind(&input.content)
    .bind(&input.cover_image)
    .bind(&input.external_url)
    .bind(&input.platform_name)
    .bind(&input.author)
    .bind(input.published_date)
    .bind(input.is_published)
    .bind(input.is_featured)
    .bind(&input.tags)
    .bind(input.read_time)
    .bind(input.display_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
