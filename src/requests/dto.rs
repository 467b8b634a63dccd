use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::error::ApiError;
use crate::requests::repo_types::ServiceRequest;

/// Required text fields default to empty so missing fields get the named 400.
#[derive(Debug, Deserialize)]
pub struct CreateRequestBody {
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub budget_min: Option<i64>,
    #[serde(default)]
    pub budget_max: Option<i64>,
    #[serde(default)]
    pub deadline: Option<Date>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CreateRequestBody {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.service_type.trim().is_empty()
            || self.title.trim().is_empty()
            || self.details.trim().is_empty()
        {
            return Err(ApiError::Validation("Missing required fields".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedRequestResponse {
    pub ok: bool,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RequestListResponse {
    pub ok: bool,
    pub requests: Vec<ServiceRequest>,
}
