use sqlx::PgPool;
use uuid::Uuid;

use super::input::{CertificationInput, EducationInput};
use crate::models::education::{Certification, Education};

pub const EDUCATION_TABLE: &str = "education";
pub const CERTIFICATIONS_TABLE: &str = "certifications";

pub async fn list_education(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>("SELECT * FROM education ORDER BY start_date DESC, display_order")
        .fetch_all(pool)
        .await
}

pub async fn list_visible_education(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>(
        "SELECT * FROM education WHERE is_visible ORDER BY start_date DESC, display_order",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_education(pool: &PgPool, id: Uuid) -> Result<Option<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>("SELECT * FROM education WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_education(
    pool: &PgPool,
    input: &EducationInput,
) -> Result<Education, sqlx::Error> {
    sqlx::query_as::<_, Education>(
        r#"
        INSERT INTO education
            (institution, institution_logo, institution_url, location, degree, field_of_study,
             grade, description, start_date, end_date, is_current, is_visible, display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(input.institution.trim())
    .bind(&input.institution_logo)
    .bind(&input.institution_url)
    .bind(&input.location)
    .bind(input.degree.as_str())
    .bind(&input.field_of_study)
    .bind(&input.grade)
    .bind(&input.description)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.is_current)
    .bind(input.is_visible)
    .bind(input.display_order)
    .fetch_one(pool)
    .await
}

pub async fn update_education(
    pool: &PgPool,
    id: Uuid,
    input: &EducationInput,
) -> Result<Option<Education>, sqlx::Error> {
    sqlx::query_as::<_, Education>(
        r#"
        UPDATE education
        SET institution = $2, institution_logo = $3, institution_url = $4, location = $5,
            degree = $6, field_of_study = $7, grade = $8, description = $9,
            start_date = $10, end_date = $11, is_current = $12, is_visible = $13,
            display_order = $14, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.institution.trim())
    .bind(&input.institution_logo)
    .bind(&input.institution_url)
    .bind(&input.location)
    .bind(input.degree.as_str())
    .bind(&input.field_of_study)
    .bind(&input.grade)
    .bind(&input.description)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.is_current)
    .bind(input.is_visible)
    .bind(input.display_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete_education(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM education WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_certifications(pool: &PgPool) -> Result<Vec<Certification>, sqlx::Error> {
    sqlx::query_as::<_, Certification>(
        "SELECT * FROM certifications ORDER BY date_obtained DESC, display_order",
    )
    .fetch_all(pool)
    .await
}

/// Visible certifications, newest first. `limit = None` returns all of them.
pub async fn list_visible_certifications(
    pool: &PgPool,
    limit: Option<i64>,
) -> Result<Vec<Certification>, sqlx::Error> {
    sqlx::query_as::<_, Certification>(
        r#"
        SELECT * FROM certifications
        WHERE is_visible
        ORDER BY date_obtained DESC, display_order
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_certification(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Certification>, sqlx::Error> {
    sqlx::query_as::<_, Certification>("SELECT * FROM certifications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_certification(
    pool: &PgPool,
    input: &CertificationInput,
) -> Result<Certification, sqlx::Error> {
    sqlx::query_as::<_, Certification>(
        r#"
        INSERT INTO certifications
            (name, issuing_organization, organization_logo, credential_id, credential_url,
             description, date_obtained, expiry_date, is_visible, display_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(input.name.trim())
    .bind(&input.issuing_organization)
    .bind(&input.organization_logo)
    .bind(&input.credential_id)
    .bind(&input.credential_url)
    .bind(&input.description)
    .bind(input.date_obtained)
    .bind(input.expiry_date)
    .bind(input.is_visible)
    .bind(input.display_order)
    .fetch_one(pool)
    .await
}

pub async fn update_certification(
    pool: &PgPool,
    id: Uuid,
    input: &CertificationInput,
) -> Result<Option<Certification>, sqlx::Error> {
    sqlx::query_as::<_, Certification>(
        r#"
        UPDATE certifications
        SET name = $2, issuing_organization = $3, organization_logo = $4,
            credential_id = $5, credential_url = $6, description = $7,
            date_obtained = $8, expiry_date = $9, is_visible = $10, display_order = $11,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(input.name.trim())
    .bind(&input.issuing_organization)
    .bind(&input.organization_logo)
    .bind(&input.credential_id)
    .bind(&input.credential_url)
    .bind(&input.description)
    .bind(input.date_obtained)
    .bind(input.expiry_date)
    .bind(input.is_visible)
    .bind(input.display_order)
    .fetch_optional(pool)
    .await
}

pub async fn delete_certification(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
