//! Media storage for uploaded images and the resume file.
//!
//! Records reference media by *key* (e.g. `projects/thumbnails/1a2b3c4d-site.png`);
//! the configured [`MediaStore`] maps keys to bytes and public URLs.

pub mod handlers;
pub mod local;
pub mod optimizer;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

use crate::config::MediaBackend;
use crate::slug::slugify;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("media not found: {0}")]
    NotFound(String),

    #[error("invalid media key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Byte storage addressed by relative keys.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> Result<(), StorageError>;

    async fn get(&self, key: &str) -> Result<Bytes, StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL for `key`. Does not check that the object exists.
    fn url(&self, key: &str) -> String;
}

/// Builds the store selected by configuration.
pub async fn build_media_store(backend: &MediaBackend) -> Arc<dyn MediaStore> {
    match backend {
        MediaBackend::Local { root, url_prefix } => {
            tracing::info!("Media stored on local disk under '{root}'");
            Arc::new(local::LocalMediaStore::new(root, url_prefix))
        }
        MediaBackend::S3(cfg) => {
            tracing::info!("Media stored in S3 bucket '{}'", cfg.bucket);
            Arc::new(s3::S3MediaStore::from_config(cfg).await)
        }
    }
}

/// Rejects keys that could escape the media root.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let bad = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..");
    if bad {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Key for a newly uploaded file: `{prefix}/{8 hex}-{slugified stem}.{ext}`.
pub fn media_key(prefix: &str, filename: &str) -> String {
    let (stem, ext) = split_name(basename(filename));
    let mut stem = slugify(stem);
    if stem.is_empty() {
        stem = "file".to_string();
    }
    let tag = &Uuid::new_v4().simple().to_string()[..8];
    match ext {
        Some(ext) => format!("{prefix}/{tag}-{stem}.{}", ext.to_ascii_lowercase()),
        None => format!("{prefix}/{tag}-{stem}"),
    }
}

/// Last path component of `path` (handles both separators).
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Splits `name` into stem and extension (without the dot).
pub fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

/// Sibling key with a suffix before the extension: `a/b.png` + `_small` ⇒ `a/b_small.png`.
pub fn sibling_key(key: &str, suffix: &str) -> String {
    let (dir, name) = match key.rfind('/') {
        Some(idx) => (&key[..=idx], &key[idx + 1..]),
        None => ("", key),
    };
    match split_name(name) {
        (stem, Some(ext)) => format!("{dir}{stem}{suffix}.{ext}"),
        (stem, None) => format!("{dir}{stem}{suffix}"),
    }
}

pub fn content_type_for(name: &str) -> &'static str {
    match split_name(name).1.map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("profile/a.png").is_ok());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("/abs/path.png").is_err());
        assert!(validate_key("a//b.png").is_err());
        assert!(validate_key("a/./b.png").is_err());
        assert!(validate_key("").is_err());
    }

    #[test]
    fn test_media_key_shape() {
        let key = media_key("projects/thumbnails", "C:\\Users\\me\\My Site.PNG");
        assert!(key.starts_with("projects/thumbnails/"));
        assert!(key.ends_with("-my-site.png"));
        assert!(validate_key(&key).is_ok());
    }

    #[test]
    fn test_media_key_without_usable_stem() {
        let key = media_key("resume", "???.pdf");
        assert!(key.ends_with("-file.pdf"));
    }

    #[test]
    fn test_sibling_key() {
        assert_eq!(sibling_key("a/b.png", "_small"), "a/b_small.png");
        assert_eq!(sibling_key("b", "_large"), "b_large");
    }

    #[test]
    fn test_split_name_dotfile() {
        assert_eq!(split_name(".env"), (".env", None));
        assert_eq!(split_name("photo.jpeg"), ("photo", Some("jpeg")));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("cv.PDF"), "application/pdf");
        assert_eq!(content_type_for("x.jpg"), "image/jpeg");
        assert_eq!(content_type_for("x"), "application/octet-stream");
    }
}
