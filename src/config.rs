use anyhow::Context;

pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub google_userinfo_url: String,
}

impl AppConfig {
    /// Loads configuration from the environment. A missing DATABASE_URL or
    /// JWT_SECRET aborts startup; misconfiguration is never a per-request error.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            ttl_hours: std::env::var("JWT_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(24),
        };
        let google_userinfo_url = std::env::var("GOOGLE_USERINFO_URL")
            .unwrap_or_else(|_| GOOGLE_USERINFO_URL.into());
        Ok(Self {
            database_url,
            jwt,
            google_userinfo_url,
        })
    }
}
