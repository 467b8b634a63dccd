use serde::{Deserialize, Serialize};

use crate::admin::repo::SiteContent;
use crate::auth::PublicUser;
use crate::error::ApiError;
use crate::public::repo::ContactSubmission;
use crate::requests::repo_types::AdminServiceRequest;

/// Status arrives as a plain string so an out-of-set value yields the named
/// 400 instead of a body-rejection error.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentUpsertBody {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl ContentUpsertBody {
    /// Returns the content value as text, coercing non-string JSON values
    /// the way the admin panel always has.
    pub fn text_value(&self) -> Result<String, ApiError> {
        match &self.value {
            None | Some(serde_json::Value::Null) => {
                Err(ApiError::Validation("Missing fields".into()))
            }
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminRequestListResponse {
    pub ok: bool,
    pub requests: Vec<AdminServiceRequest>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub ok: bool,
    pub users: Vec<PublicUser>,
}

#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub ok: bool,
    pub content: Vec<SiteContent>,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub ok: bool,
    pub contacts: Vec<ContactSubmission>,
}
