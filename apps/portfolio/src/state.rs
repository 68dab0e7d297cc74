use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::media::MediaStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Local disk or S3, selected by `MEDIA_BACKEND`.
    pub media: Arc<dyn MediaStore>,
    pub config: Config,
}
