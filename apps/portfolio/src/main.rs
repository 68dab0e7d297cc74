mod analytics;
mod auth;
mod blog;
mod config;
mod contact;
mod db;
mod education;
mod errors;
mod experience;
mod forms;
mod media;
mod models;
mod pages;
mod pagination;
mod projects;
mod routes;
mod site;
mod skills;
mod slug;
mod state;
mod testimonials;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppEnv, Config};
use crate::db::{create_pool, run_migrations};
use crate::media::build_media_store;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    if config.run_migrations {
        run_migrations(&db).await?;
        site::store::ensure_default(&db).await?;
    } else {
        info!("RUN_MIGRATIONS=false; skipping migrations");
    }

    // Initialize media storage (local disk or S3)
    let media = build_media_store(&config.media).await;

    let cors = build_cors(&config)?;

    let state = AppState {
        db,
        media,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Permissive in dev; production only admits `ALLOWED_ORIGINS`.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    match config.app_env {
        AppEnv::Dev => Ok(CorsLayer::permissive()),
        AppEnv::Prod => {
            if config.allowed_origins.is_empty() {
                warn!("APP_ENV=prod with no ALLOWED_ORIGINS; cross-origin requests are refused");
            }
            let origins = config
                .allowed_origins
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o).with_context(|| format!("Invalid origin '{o}'"))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any))
        }
    }
}
