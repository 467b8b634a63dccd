use sqlx::PgPool;
use uuid::Uuid;

use crate::requests::dto::CreateRequestBody;
use crate::requests::repo_types::{AdminServiceRequest, RequestStatus, ServiceRequest};

impl ServiceRequest {
    /// Insert a new request for the given owner; status starts at 'new'.
    pub async fn create(db: &PgPool, user_id: Uuid, body: &CreateRequestBody) -> sqlx::Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO service_requests
                (user_id, service_type, title, details, budget_min, budget_max, deadline, phone, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'new')
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(body.service_type.trim())
        .bind(body.title.trim())
        .bind(body.details.trim())
        .bind(body.budget_min)
        .bind(body.budget_max)
        .bind(body.deadline)
        .bind(body.phone.as_deref())
        .fetch_one(db)
        .await
    }

    /// A customer's own requests, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<ServiceRequest>> {
        sqlx::query_as::<_, ServiceRequest>(
            r#"
            SELECT id, user_id, service_type, title, details, budget_min, budget_max,
                   deadline, phone, status, created_at
            FROM service_requests
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Every request joined with its owner, newest first (admin view).
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<AdminServiceRequest>> {
        sqlx::query_as::<_, AdminServiceRequest>(
            r#"
            SELECT r.id, r.user_id, r.service_type, r.title, r.details, r.budget_min,
                   r.budget_max, r.deadline, r.phone, r.status, r.created_at,
                   u.email, u.full_name
            FROM service_requests r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Set a request's status. Updating an unknown id affects zero rows and
    /// is not an error, matching the admin panel's fire-and-forget semantics.
    pub async fn update_status(db: &PgPool, id: Uuid, status: RequestStatus) -> sqlx::Result<()> {
        sqlx::query("UPDATE service_requests SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
