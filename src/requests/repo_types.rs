use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Workflow state of a service request. Any status may follow any other;
/// there is no enforced transition machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    InProgress,
    Done,
    Rejected,
}

impl RequestStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A customer-submitted work request.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_type: String,
    pub title: String,
    pub details: String,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub deadline: Option<Date>,
    pub phone: Option<String>,
    pub status: RequestStatus,
    pub created_at: OffsetDateTime,
}

/// Admin view: a request joined with its owner's email and name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AdminServiceRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_type: String,
    pub title: String,
    pub details: String,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub deadline: Option<Date>,
    pub phone: Option<String>,
    pub status: RequestStatus,
    pub created_at: OffsetDateTime,
    pub email: String,
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_parse() {
        assert_eq!(RequestStatus::parse("new"), Some(RequestStatus::New));
        assert_eq!(
            RequestStatus::parse("in_progress"),
            Some(RequestStatus::InProgress)
        );
        assert_eq!(RequestStatus::parse("done"), Some(RequestStatus::Done));
        assert_eq!(
            RequestStatus::parse("rejected"),
            Some(RequestStatus::Rejected)
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(RequestStatus::parse("archived"), None);
        assert_eq!(RequestStatus::parse("NEW"), None);
        assert_eq!(RequestStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
