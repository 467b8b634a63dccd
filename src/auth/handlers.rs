use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::auth::dto::{
    GoogleLoginRequest, LoginRequest, SignupRequest, SignupResponse, TokenResponse,
};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/google", post(google_login))
}

fn map_insert_err(e: sqlx::Error) -> ApiError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            ApiError::Conflict("Email already exists")
        }
        _ => e.into(),
    }
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    // Pre-check for a friendly conflict; the unique constraint is the
    // authoritative guard if two signups race on the same email.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "signup with taken email");
        return Err(ApiError::Conflict("Email already exists"));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create_with_password(
        &state.db,
        payload.full_name.trim(),
        &payload.email,
        &hash,
        payload.phone.trim(),
        payload.company.as_deref(),
    )
    .await
    .map_err(map_insert_err)?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(Json(SignupResponse {
        ok: true,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    // Unknown email, a Google-only account and a wrong password all get the
    // same answer so callers cannot enumerate accounts.
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login with unknown email");
            return Err(ApiError::Unauthorized("Invalid login"));
        }
    };
    let Some(hash) = user.password_hash.as_deref() else {
        warn!(user_id = %user.id, "password login against google-only account");
        return Err(ApiError::Unauthorized("Invalid login"));
    };
    if !verify_password(&payload.password, hash)? {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::Unauthorized("Invalid login"));
    }

    let token = JwtKeys::from_ref(&state).issue(&user)?;
    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse {
        ok: true,
        token,
        role: user.role,
        name: user.full_name,
    }))
}

#[instrument(skip(state, payload))]
pub async fn google_login(
    State(state): State<AppState>,
    Json(payload): Json<GoogleLoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if payload.access_token.trim().is_empty() {
        return Err(ApiError::Validation("Missing access_token".into()));
    }

    let profile = state
        .google
        .fetch_profile(payload.access_token.trim())
        .await?
        .ok_or(ApiError::Unauthorized("Invalid Google token"))?;

    let email = profile.email.trim().to_lowercase();
    let name = profile.name.unwrap_or_default();

    let user = match User::find_by_email(&state.db, &email).await? {
        // Existing account: attach the subject id if it is not already set.
        // An email-password account keeps its hash and becomes both-linked.
        Some(existing) => User::link_google(&state.db, existing.id, &profile.sub).await?,
        None => User::create_from_google(&state.db, &name, &email, &profile.sub)
            .await
            .map_err(map_insert_err)?,
    };

    let token = JwtKeys::from_ref(&state).issue(&user)?;
    info!(user_id = %user.id, "google login");
    Ok(Json(TokenResponse {
        ok: true,
        token,
        role: user.role,
        name: user.full_name,
    }))
}
