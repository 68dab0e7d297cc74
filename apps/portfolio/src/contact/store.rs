use sqlx::PgPool;
use uuid::Uuid;

use super::input::ContactForm;
use crate::models::choices::ContactStatus;
use crate::models::contact::ContactSubmission;

/// Request metadata stored next to a submission.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: String,
}

pub async fn create(
    pool: &PgPool,
    form: &ContactForm,
    client: &ClientInfo,
) -> Result<ContactSubmission, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        r#"
        INSERT INTO contact_submissions
            (name, email, subject, message, phone, company, ip_address, user_agent)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(form.name.trim())
    .bind(form.email.trim())
    .bind(form.subject.trim())
    .bind(&form.message)
    .bind(&form.phone)
    .bind(&form.company)
    .bind(&client.ip_address)
    .bind(&client.user_agent)
    .fetch_one(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        "SELECT * FROM contact_submissions ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>("SELECT * FROM contact_submissions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn set_status(
    pool: &PgPool,
    id: Uuid,
    status: ContactStatus,
) -> Result<Option<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        r#"
        UPDATE contact_submissions
        SET status = $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
