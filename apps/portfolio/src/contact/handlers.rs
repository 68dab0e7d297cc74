use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use super::input::{ContactForm, StatusUpdate, USER_AGENT_MAX};
use super::store::{self, ClientInfo};
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::forms::{client_ip, header_str, truncate_chars, JsonBody};
use crate::models::contact::ContactSubmission;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Contact submission {id} not found"))
}

/// Caller address and a bounded user agent, taken from the request.
pub fn client_info(headers: &HeaderMap, remote: Option<SocketAddr>) -> ClientInfo {
    ClientInfo {
        ip_address: client_ip(headers, remote),
        user_agent: truncate_chars(&header_str(headers, USER_AGENT.as_str()), USER_AGENT_MAX),
    }
}

/// POST /api/v1/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    connect: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    JsonBody(form): JsonBody<ContactForm>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    form.validate()?;

    let client = client_info(&headers, connect.map(|ConnectInfo(addr)| addr));
    let row = store::create(&state.db, &form, &client).await?;
    info!(
        "Contact submission {} from {} ({})",
        row.id,
        row.email,
        row.ip_address.as_deref().unwrap_or("unknown address")
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Thank you! I'll get back to you soon.",
            "id": row.id,
        })),
    ))
}

/// GET /api/v1/admin/contact
pub async fn handle_list_contacts(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /api/v1/admin/contact/:id
pub async fn handle_get_contact(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactSubmission>, AppError> {
    let row = store::get(&state.db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PATCH /api/v1/admin/contact/:id
pub async fn handle_update_contact_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(update): JsonBody<StatusUpdate>,
) -> Result<Json<ContactSubmission>, AppError> {
    let row = store::set_status(&state.db, id, update.status)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!("Contact submission {id} marked {}", update.status.as_str());
    Ok(Json(row))
}

/// DELETE /api/v1/admin/contact/:id
pub async fn handle_delete_contact(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
