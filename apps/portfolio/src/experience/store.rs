use sqlx::PgPool;
use uuid::Uuid;

use super::input::ExperienceInput;
use crate::models::experience::Experience;

pub const TABLE: &str = "experiences";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        "SELECT * FROM experiences ORDER BY start_date DESC, display_order",
    )
    .fetch_all(pool)
    .await
}

/// Visible rows, most recent first. `limit = None` returns all of them.
pub async fn list_visible(
    pool: &PgPool,
    limit: Option<i64>,
) -> Result<Vec<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        SELECT * FROM experiences
        WHERE is_visible
        ORDER BY start_date DESC, display_order
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>("SELECT * FROM experiences WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: &ExperienceInput) -> Result<Experience, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        INSERT INTO experiences
            (company_name, company_logo, company_url, location, position, employment_type,
             description, technologies, start_date, end_date, is_current, is_visible,
             display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(input.company_name.trim())
    .bind(&input.company_logo)
    .bind(&input.company_url)
    .bind(&input.location)
    .bind(&input.position)
    .bind(input.employment_type.as_str())
    .bind(&input.description)
    .bind(&input.technologies)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.is_current)
    .bind(input.is_visible)
    .bind(input.display_order)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &ExperienceInput,
) -> Result<Option<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        UPDATE experiences
        SET company_name = $2, company_logo = $3, company_url = $4, location = $5,
            position = $6, employment_type = $7, description = $8, technologies = $9,
            start_date = $10, end_date = $11, is_current = $12, is_visible = $13,
            display_order = $14, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.company_name.trim())
    .bind(&input.company_logo)
    .bind(&input.company_url)
    .bind(&input.location)
    .bind(&input.position)
    .bind(input.employment_type.as_str())
    .bind(&input.description)
    .bind(&input.technologies)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.is_current)
    .bind(input.is_visible)
    .bind(input.display_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
