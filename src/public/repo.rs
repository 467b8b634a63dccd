use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// An anonymous lead from the contact form. Write-once; only admins read it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub service: String,
    pub message: String,
    pub created_at: OffsetDateTime,
}

impl ContactSubmission {
    pub async fn create(
        db: &PgPool,
        name: &str,
        contact: &str,
        service: &str,
        message: &str,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_submissions (name, contact, service, message)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(name)
        .bind(contact)
        .bind(service)
        .bind(message)
        .execute(db)
        .await?;
        Ok(())
    }

    /// All submissions, newest first (admin view).
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<ContactSubmission>> {
        sqlx::query_as::<_, ContactSubmission>(
            r#"
            SELECT id, name, contact, service, message, created_at
            FROM contact_submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
