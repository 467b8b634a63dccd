use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::requests::dto::{CreateRequestBody, CreatedRequestResponse, RequestListResponse};
use crate::requests::repo_types::ServiceRequest;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requests", post(create_request))
        .route("/requests/mine", get(my_requests))
}

#[instrument(skip(state, payload))]
pub async fn create_request(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateRequestBody>,
) -> Result<Json<CreatedRequestResponse>, ApiError> {
    payload.validate()?;
    let id = ServiceRequest::create(&state.db, claims.id, &payload).await?;
    info!(user_id = %claims.id, request_id = %id, "service request created");
    Ok(Json(CreatedRequestResponse { ok: true, id }))
}

#[instrument(skip(state))]
pub async fn my_requests(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<RequestListResponse>, ApiError> {
    let requests = ServiceRequest::list_by_user(&state.db, claims.id).await?;
    Ok(Json(RequestListResponse { ok: true, requests }))
}
