use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::claims::{CreatedVia, Role};
use crate::auth::repo_types::User;
use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Fields default to empty so a missing field reaches validation and gets a
/// named 400 instead of a body-rejection error.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub agree: bool,
}

impl SignupRequest {
    /// Checks run in order; the first failure's message is returned.
    pub fn validate(&self) -> Result<(), ApiError> {
        let name = self.full_name.trim();
        if name.len() < 2 || name.len() > 100 {
            return Err(ApiError::Validation("Invalid name".into()));
        }
        if !is_valid_email(&self.email) {
            return Err(ApiError::Validation("Invalid email".into()));
        }
        let phone = self.phone.trim();
        if phone.len() < 7 || phone.len() > 20 {
            return Err(ApiError::Validation("Invalid phone".into()));
        }
        if self.password.len() < 8 || self.password.len() > 72 {
            return Err(ApiError::Validation(
                "Password must be 8-72 characters".into(),
            ));
        }
        let has_letter = self.password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = self.password.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit {
            return Err(ApiError::Validation(
                "Password must contain a letter and a digit".into(),
            ));
        }
        if !self.agree {
            return Err(ApiError::Validation("You must accept the terms".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::Validation("Missing fields".into()));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ApiError::Validation("Invalid email".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct GoogleLoginRequest {
    #[serde(default)]
    pub access_token: String,
}

/// Safe subset of a user returned to clients and to the admin listing.
/// The password hash and Google subject id are never part of this.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub role: Role,
    pub created_via: Option<CreatedVia>,
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            email: u.email,
            phone: u.phone,
            company: u.company,
            role: u.role,
            created_via: u.created_via,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub ok: bool,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub ok: bool,
    pub token: String,
    pub role: Role,
    pub name: String,
}
