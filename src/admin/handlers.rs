use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::admin::dto::{
    AdminRequestListResponse, ContactListResponse, ContentListResponse, ContentUpsertBody,
    UpdateStatusBody, UserListResponse,
};
use crate::admin::repo::SiteContent;
use crate::auth::extractors::AdminUser;
use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::public::dto::OkResponse;
use crate::public::repo::ContactSubmission;
use crate::requests::repo_types::{RequestStatus, ServiceRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/requests", get(list_requests))
        .route("/admin/requests/:id", patch(update_request_status))
        .route("/admin/users", get(list_users))
        .route("/admin/content", get(get_content).put(put_content))
        .route("/admin/contacts", get(list_contacts))
}

#[instrument(skip(state))]
pub async fn list_requests(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<AdminRequestListResponse>, ApiError> {
    let requests = ServiceRequest::list_all(&state.db).await?;
    Ok(Json(AdminRequestListResponse { ok: true, requests }))
}

#[instrument(skip(state, payload))]
pub async fn update_request_status(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusBody>,
) -> Result<Json<OkResponse>, ApiError> {
    let status = RequestStatus::parse(&payload.status)
        .ok_or_else(|| ApiError::Validation("Invalid status".into()))?;
    ServiceRequest::update_status(&state.db, id, status).await?;
    info!(admin_id = %claims.id, request_id = %id, status = %payload.status, "request status updated");
    Ok(Json(OkResponse { ok: true }))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<UserListResponse>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(UserListResponse { ok: true, users }))
}

#[instrument(skip(state))]
pub async fn get_content(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<ContentListResponse>, ApiError> {
    let content = SiteContent::list_all(&state.db).await?;
    Ok(Json(ContentListResponse { ok: true, content }))
}

#[instrument(skip(state, payload))]
pub async fn put_content(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Json(payload): Json<ContentUpsertBody>,
) -> Result<Json<OkResponse>, ApiError> {
    if payload.key.trim().is_empty() {
        return Err(ApiError::Validation("Missing fields".into()));
    }
    let value = payload.text_value()?;
    SiteContent::upsert(&state.db, payload.key.trim(), &value).await?;
    info!(admin_id = %claims.id, key = %payload.key, "site content updated");
    Ok(Json(OkResponse { ok: true }))
}

#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
) -> Result<Json<ContactListResponse>, ApiError> {
    let contacts = ContactSubmission::list_all(&state.db).await?;
    Ok(Json(ContactListResponse { ok: true, contacts }))
}
