use sqlx::PgPool;

use crate::models::analytics::{DownloadSummary, ResumeDownload, SourceCount};
use crate::models::choices::DownloadSource;

pub const TABLE: &str = "resume_downloads";

/// How many rows the summary lists under `recent_downloads`.
pub const RECENT_LIMIT: i64 = 10;

#[derive(Debug, Clone)]
pub struct NewDownload {
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
    pub source: DownloadSource,
}

pub async fn record(pool: &PgPool, download: &NewDownload) -> Result<ResumeDownload, sqlx::Error> {
    sqlx::query_as::<_, ResumeDownload>(
        r#"
        INSERT INTO resume_downloads (ip_address, user_agent, referrer, download_source)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&download.ip_address)
    .bind(&download.user_agent)
    .bind(&download.referrer)
    .bind(download.source.as_str())
    .fetch_one(pool)
    .await
}

pub async fn summary(pool: &PgPool) -> Result<DownloadSummary, sqlx::Error> {
    let (total_downloads, unique_ips): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(DISTINCT ip_address) FROM resume_downloads",
    )
    .fetch_one(pool)
    .await?;

    let downloads_by_source = sqlx::query_as::<_, SourceCount>(
        r#"
        SELECT download_source, COUNT(*) AS count
        FROM resume_downloads
        GROUP BY download_source
        ORDER BY count DESC, download_source
        "#,
    )
    .fetch_all(pool)
    .await?;

    let recent_downloads = sqlx::query_as::<_, ResumeDownload>(
        "SELECT * FROM resume_downloads ORDER BY created_at DESC LIMIT $1",
    )
    .bind(RECENT_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(DownloadSummary {
        total_downloads,
        unique_ips,
        downloads_by_source,
        recent_downloads,
    })
}
