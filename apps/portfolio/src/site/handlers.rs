use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::{info, warn};

use super::input::SiteSettingsInput;
use super::store;
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::JsonBody;
use crate::media::optimizer::{optimize_image, PROFILE_MAX};
use crate::media::MediaStore;
use crate::models::site::SiteSettings;
use crate::state::AppState;

/// GET /api/v1/admin/site
pub async fn handle_get_site(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<SiteSettings>, AppError> {
    Ok(Json(store::get_or_create(&state.db).await?))
}

/// PUT /api/v1/admin/site
pub async fn handle_save_site(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SiteSettingsInput>,
) -> Result<Json<SiteSettings>, AppError> {
    input.validate()?;

    let current = store::get_or_create(&state.db).await?;
    let mut replaced_photo = None;
    if let Some(key) = input.profile_image.as_deref() {
        if current.profile_image.as_deref() != Some(key) {
            // The new photo must already be uploaded.
            replaced_photo = Some((key, state.media.get(key).await?));
        }
    }

    let saved = store::save(&state.db, &input).await?;
    info!("Site settings saved for '{}'", saved.full_name);
    // Only a committed save rewrites the stored photo.
    if let Some((key, original)) = replaced_photo {
        reoptimize_profile_image(state.media.as_ref(), key, original).await;
    }
    Ok(Json(saved))
}

/// Shrinks a profile photo to its display bounds and overwrites it in place.
/// Any failure leaves the original file untouched.
async fn reoptimize_profile_image(media: &dyn MediaStore, key: &str, original: Bytes) {
    let optimized = match optimize_image(&original, key, Some(PROFILE_MAX), Some(PROFILE_MAX)) {
        Ok(img) => img,
        Err(e) => {
            warn!("Error optimizing profile image '{key}': {e}");
            return;
        }
    };
    if let Err(e) = media
        .put(key, Bytes::from(optimized.bytes), optimized.content_type)
        .await
    {
        warn!("Could not store optimized profile image '{key}': {e}");
        return;
    }
    info!(
        "Profile image '{key}' optimized to {}x{}",
        optimized.width, optimized.height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::local::LocalMediaStore;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    #[tokio::test]
    async fn test_profile_image_replaced_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path(), "/media/");

        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::from_pixel(1200, 800, Rgb([1, 2, 3])))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        let original = Bytes::from(buf.into_inner());
        store
            .put("profile/me.png", original.clone(), "image/png")
            .await
            .unwrap();

        reoptimize_profile_image(&store, "profile/me.png", original).await;

        let stored = store.get("profile/me.png").await.unwrap();
        let img = image::load_from_memory(&stored).unwrap();
        assert_eq!((img.width(), img.height()), (500, 333));
    }

    #[tokio::test]
    async fn test_undecodable_profile_image_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalMediaStore::new(dir.path(), "/media/");
        let original = Bytes::from_static(b"not really a jpeg");
        store
            .put("profile/me.jpg", original.clone(), "image/jpeg")
            .await
            .unwrap();

        reoptimize_profile_image(&store, "profile/me.jpg", original.clone()).await;

        assert_eq!(store.get("profile/me.jpg").await.unwrap(), original);
    }
}
