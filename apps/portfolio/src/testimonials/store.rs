use sqlx::PgPool;
use uuid::Uuid;

use super::input::TestimonialInput;
use crate::models::testimonial::Testimonial;

pub const TABLE: &str = "testimonials";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        "SELECT * FROM testimonials ORDER BY display_order, created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_featured_approved(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT * FROM testimonials
        WHERE is_approved AND is_featured
        ORDER BY display_order, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: &TestimonialInput) -> Result<Testimonial, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials
            (author, position, company, content, photo, linkedin_url, rating,
             is_featured, is_approved, display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(input.author.trim())
    .bind(&input.position)
    .bind(&input.company)
    .bind(&input.content)
    .bind(&input.photo)
    .bind(&input.linkedin_url)
    .bind(input.rating)
    .bind(input.is_featured)
    .bind(input.is_approved)
    .bind(input.display_order)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &TestimonialInput,
) -> Result<Option<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        UPDATE testimonials
        SET author = $2, position = $3, company = $4, content = $5, photo = $6,
            linkedin_url = $7, rating = $8, is_featured = $9, is_approved = $10,
            display_order = $11
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.author.trim())
    .bind(&input.position)
    .bind(&input.company)
    .bind(&input.content)
    .bind(&input.photo)
    .bind(&input.linkedin_url)
    .bind(input.rating)
    .bind(input.is_featured)
    .bind(input.is_approved)
    .bind(input.display_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
