use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// One editable key/value pair of site copy.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SiteContent {
    pub key: String,
    pub value: String,
}

impl SiteContent {
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<SiteContent>> {
        sqlx::query_as::<_, SiteContent>("SELECT key, value FROM site_content ORDER BY key")
            .fetch_all(db)
            .await
    }

    /// Insert-or-replace keyed on the primary key; bumps updated_at.
    pub async fn upsert(db: &PgPool, key: &str, value: &str) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO site_content (key, value, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (key) DO UPDATE
            SET value = excluded.value, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(db)
        .await?;
        Ok(())
    }
}
