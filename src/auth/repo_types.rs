use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::claims::{CreatedVia, Role};

/// User record in the database. The password hash and Google subject id
/// never cross the serialization boundary.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String, // stored lowercase
    #[serde(skip_serializing)]
    pub password_hash: Option<String>, // absent for Google-only accounts
    pub role: Role,
    #[serde(skip_serializing)]
    pub google_sub: Option<String>,
    pub created_via: Option<CreatedVia>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: OffsetDateTime,
}
