use axum::{
    extract::{multipart::MultipartError, Multipart, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::optimizer::{create_thumbnail, optimize_image, ThumbnailSize, PROFILE_MAX};
use super::{content_type_for, media_key, sibling_key, MediaStore};
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::state::AppState;

/// Request body ceiling for uploads (applied on the route).
pub const UPLOAD_LIMIT: usize = 20 * 1024 * 1024;

/// What an upload is for. Decides the key prefix and image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Profile,
    Resume,
    ProjectThumbnail,
    ProjectFeatured,
    ProjectGallery,
    BlogCover,
    TestimonialPhoto,
    CompanyLogo,
    InstitutionLogo,
    CertificationLogo,
}

impl UploadKind {
    pub fn prefix(self) -> &'static str {
        match self {
            UploadKind::Profile => "profile",
            UploadKind::Resume => "resume",
            UploadKind::ProjectThumbnail => "projects/thumbnails",
            UploadKind::ProjectFeatured => "projects/featured",
            UploadKind::ProjectGallery => "projects/gallery",
            UploadKind::BlogCover => "blog",
            UploadKind::TestimonialPhoto => "testimonials",
            UploadKind::CompanyLogo => "experience/logos",
            UploadKind::InstitutionLogo => "education/logos",
            UploadKind::CertificationLogo => "certifications/logos",
        }
    }

    /// `None` for non-image uploads, which are stored untouched.
    /// `Some((None, None))` means the optimizer's default bounds.
    pub fn bounds(self) -> Option<(Option<u32>, Option<u32>)> {
        match self {
            UploadKind::Resume => None,
            UploadKind::Profile => Some((Some(PROFILE_MAX), Some(PROFILE_MAX))),
            _ => Some((None, None)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub kind: UploadKind,
    /// `true` for every size, or a comma list such as `small,large`.
    #[serde(default)]
    pub thumbnails: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoredThumbnail {
    pub size: &'static str,
    pub key: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub key: String,
    pub url: String,
    pub thumbnails: Vec<StoredThumbnail>,
}

pub fn parse_thumbnails(raw: Option<&str>) -> Result<Vec<ThumbnailSize>, AppError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    match raw {
        "" | "false" | "0" => Ok(Vec::new()),
        "true" | "1" => Ok(ThumbnailSize::ALL.to_vec()),
        list => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                ThumbnailSize::parse(s)
                    .ok_or_else(|| AppError::Validation(format!("Unknown thumbnail size '{s}'")))
            })
            .collect(),
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Uploads are limited to {} MiB", UPLOAD_LIMIT >> 20))
    } else {
        AppError::Validation(e.body_text())
    }
}

/// POST /api/v1/admin/media?kind=&thumbnails=
///
/// Expects a multipart form with a `file` field.
pub async fn handle_upload(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let sizes = parse_thumbnails(query.thumbnails.as_deref())?;

    let mut file: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        file = Some((filename, data));
    }
    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("Missing required 'file' field".into()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".into()));
    }

    let response = store_upload(state.media.as_ref(), query.kind, &filename, data, &sizes).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub key: String,
}

/// DELETE /api/v1/admin/media?key=
pub async fn handle_delete_media(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, AppError> {
    state.media.delete(&query.key).await?;
    info!("Deleted media '{}'", query.key);
    Ok(StatusCode::NO_CONTENT)
}

/// Stores an upload under a fresh key for `kind`, optimising images and
/// writing any requested thumbnails next to it.
pub async fn store_upload(
    media: &dyn MediaStore,
    kind: UploadKind,
    filename: &str,
    data: Bytes,
    sizes: &[ThumbnailSize],
) -> Result<UploadResponse, AppError> {
    let key = media_key(kind.prefix(), filename);

    let Some((max_w, max_h)) = kind.bounds() else {
        if !sizes.is_empty() {
            return Err(AppError::Validation(
                "Thumbnails are only produced for images".into(),
            ));
        }
        if content_type_for(filename) != "application/pdf" {
            return Err(AppError::Validation("Resume must be a PDF file".into()));
        }
        media.put(&key, data, "application/pdf").await?;
        info!("Stored resume at '{key}'");
        return Ok(UploadResponse {
            url: media.url(&key),
            key,
            thumbnails: Vec::new(),
        });
    };

    let (bytes, content_type) = match optimize_image(&data, filename, max_w, max_h) {
        Ok(img) => {
            info!(
                "Optimized upload '{}' to {}x{} ({} -> {} bytes)",
                img.name,
                img.width,
                img.height,
                data.len(),
                img.bytes.len()
            );
            (Bytes::from(img.bytes), img.content_type)
        }
        Err(e) => {
            warn!("Error optimizing image '{filename}', storing original: {e}");
            (data.clone(), content_type_for(filename))
        }
    };
    media.put(&key, bytes, content_type).await?;

    let mut thumbnails = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let thumb = match create_thumbnail(&data, filename, size) {
            Ok(t) => t,
            Err(e) => {
                warn!("Error creating {} thumbnail for '{filename}': {e}", size.as_str());
                continue;
            }
        };
        let thumb_key = sibling_key(&key, &format!("_{}", size.as_str()));
        media
            .put(&thumb_key, Bytes::from(thumb.bytes), thumb.content_type)
            .await?;
        thumbnails.push(StoredThumbnail {
            size: size.as_str(),
            url: media.url(&thumb_key),
            key: thumb_key,
        });
    }

    Ok(UploadResponse {
        url: media.url(&key),
        key,
        thumbnails,
    })
}
