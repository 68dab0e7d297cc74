use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, REFERER, USER_AGENT},
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use super::store::{self, NewDownload};
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::{client_ip, header_str, truncate_chars};
use crate::models::analytics::DownloadSummary;
use crate::models::choices::DownloadSource;
use crate::site;
use crate::state::AppState;

const REFERRER_MAX: usize = 500;

/// Stored when neither a forwarded address nor a peer address is known.
const UNKNOWN_IP: &str = "unknown";

#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    pub source: Option<String>,
}

/// Missing or unrecognised sources count as direct downloads.
pub fn parse_source(raw: Option<&str>) -> DownloadSource {
    raw.and_then(DownloadSource::parse)
        .unwrap_or(DownloadSource::Direct)
}

/// `attachment; filename="{name}_Resume.pdf"` with characters that would
/// break the quoted string removed.
pub fn attachment_disposition(full_name: &str) -> HeaderValue {
    let name: String = full_name
        .chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect();
    let name = name.trim();
    let value = if name.is_empty() {
        "attachment; filename=\"Resume.pdf\"".to_string()
    } else {
        format!("attachment; filename=\"{name}_Resume.pdf\"")
    };
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"Resume.pdf\""))
}

/// GET /api/v1/resume/download?source=
///
/// Records the download, then serves the resume as a PDF attachment.
pub async fn handle_resume_download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
    connect: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let settings = site::store::load(&state.db).await;
    let Some(key) = settings.resume_file.as_deref().filter(|k| !k.is_empty()) else {
        return Err(AppError::NotFound("Resume not available".to_string()));
    };

    let download = NewDownload {
        ip_address: client_ip(&headers, connect.map(|ConnectInfo(addr)| addr))
            .unwrap_or_else(|| UNKNOWN_IP.to_string()),
        user_agent: header_str(&headers, USER_AGENT.as_str()),
        referrer: truncate_chars(&header_str(&headers, REFERER.as_str()), REFERRER_MAX),
        source: parse_source(query.source.as_deref()),
    };
    match store::record(&state.db, &download).await {
        Ok(row) => info!(
            "Resume download {} from {} via {}",
            row.id, row.ip_address, row.download_source
        ),
        Err(e) => warn!("Could not record resume download: {e}"),
    }

    let bytes = state.media.get(key).await.map_err(|e| {
        warn!("Resume file '{key}' unavailable: {e}");
        AppError::NotFound("Resume file not found".to_string())
    })?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (CONTENT_DISPOSITION, attachment_disposition(&settings.full_name)),
        ],
        bytes,
    )
        .into_response())
}

/// GET /api/v1/admin/analytics/resume
pub async fn handle_download_summary(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<DownloadSummary>, AppError> {
    Ok(Json(store::summary(&state.db).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_defaults_to_direct() {
        assert_eq!(parse_source(None), DownloadSource::Direct);
        assert_eq!(parse_source(Some("navbar")), DownloadSource::Navbar);
        assert_eq!(parse_source(Some("modal")), DownloadSource::Modal);
        assert_eq!(parse_source(Some("email")), DownloadSource::Direct);
    }

    #[test]
    fn test_attachment_disposition() {
        assert_eq!(
            attachment_disposition("Jane Doe"),
            "attachment; filename=\"Jane Doe_Resume.pdf\""
        );
        assert_eq!(
            attachment_disposition("Jane \"JD\" Doe"),
            "attachment; filename=\"Jane JD Doe_Resume.pdf\""
        );
        assert_eq!(attachment_disposition("  "), "attachment; filename=\"Resume.pdf\"");
    }
}
