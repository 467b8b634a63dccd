use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ContactBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

impl ContactBody {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty()
            || self.contact.trim().is_empty()
            || self.service.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ApiError::Validation("Missing required fields".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
