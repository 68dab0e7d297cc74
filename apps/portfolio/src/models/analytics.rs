use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeDownload {
    pub id: Uuid,
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: String,
    pub country: String,
    pub city: String,
    pub download_source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SourceCount {
    pub download_source: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadSummary {
    pub total_downloads: i64,
    pub unique_ips: i64,
    pub downloads_by_source: Vec<SourceCount>,
    pub recent_downloads: Vec<ResumeDownload>,
}
