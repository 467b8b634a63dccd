use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::dto::PublicUser;
use crate::auth::repo_types::User;

impl User {
    /// Find a user by (already lowercased) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, email, password_hash, role, google_sub,
                   created_via, phone, company, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Create a customer account from the email signup flow.
    ///
    /// A racing duplicate signup surfaces here as a unique-constraint
    /// violation; the handler maps it to the same conflict as the pre-check.
    pub async fn create_with_password(
        db: &PgPool,
        full_name: &str,
        email: &str,
        password_hash: &str,
        phone: &str,
        company: Option<&str>,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, password_hash, role, created_via, phone, company)
            VALUES ($1, $2, $3, 'customer', 'email', $4, $5)
            RETURNING id, full_name, email, password_hash, role, google_sub,
                      created_via, phone, company, created_at
            "#,
        )
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .bind(company)
        .fetch_one(db)
        .await
    }

    /// Create a customer account from a first Google login. No password hash.
    pub async fn create_from_google(
        db: &PgPool,
        full_name: &str,
        email: &str,
        google_sub: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, role, google_sub, created_via)
            VALUES ($1, $2, 'customer', $3, 'google')
            RETURNING id, full_name, email, password_hash, role, google_sub,
                      created_via, phone, company, created_at
            "#,
        )
        .bind(full_name)
        .bind(email)
        .bind(google_sub)
        .fetch_one(db)
        .await
    }

    /// Attach a Google subject id to an existing account. COALESCE keeps an
    /// already-linked subject id and an already-set creation channel, so the
    /// linkage is monotonic and an existing password hash is untouched.
    pub async fn link_google(db: &PgPool, id: Uuid, google_sub: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET google_sub = COALESCE(google_sub, $2),
                created_via = COALESCE(created_via, 'google')
            WHERE id = $1
            RETURNING id, full_name, email, password_hash, role, google_sub,
                      created_via, phone, company, created_at
            "#,
        )
        .bind(id)
        .bind(google_sub)
        .fetch_one(db)
        .await
    }

    /// All users with safe fields only, newest first. The password hash is
    /// not even selected.
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, full_name, email, phone, company, role, created_via, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
