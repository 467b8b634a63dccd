use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::public::dto::{ContactBody, OkResponse};
use crate::public::repo::ContactSubmission;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/public/contact", post(submit_contact))
}

#[instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactBody>,
) -> Result<Json<OkResponse>, ApiError> {
    payload.validate()?;
    ContactSubmission::create(
        &state.db,
        payload.name.trim(),
        payload.contact.trim(),
        payload.service.trim(),
        payload.message.trim(),
    )
    .await?;
    info!("contact submission stored");
    Ok(Json(OkResponse { ok: true }))
}
