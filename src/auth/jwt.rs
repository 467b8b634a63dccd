use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::auth::claims::Claims;
use crate::auth::repo_types::User;
use crate::config::JwtConfig;
use crate::state::AppState;

/// HS256 signing/verification keys plus the session lifetime.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: TimeDuration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig { secret, ttl_hours } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: TimeDuration::hours(ttl_hours),
        }
    }
}

impl JwtKeys {
    /// Signs an identity assertion for the given user, expiring `ttl` from now.
    pub fn issue(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.ttl;
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            name: user.full_name.clone(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "jwt issued");
        Ok(token)
    }

    /// Checks signature and expiry. Callers collapse every failure into one
    /// uniform Unauthorized outcome; the reason never reaches the client.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        // tokens carry only {id, email, role, name, iat, exp}
        validation.validate_aud = false;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::auth::claims::{CreatedVia, Role};
    use uuid::Uuid;

    pub(crate) fn sample_user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Test Person".into(),
            email: "test@example.com".into(),
            password_hash: Some("$2b$12$fake".into()),
            role,
            google_sub: None,
            created_via: Some(CreatedVia::Email),
            phone: None,
            company: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn make_keys(secret: &str, ttl_hours: i64) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: TimeDuration::hours(ttl_hours),
        }
    }

    #[test]
    fn issue_and_verify_round_trips_claims() {
        let keys = make_keys("dev-secret", 24);
        let user = sample_user(Role::Customer);
        let token = keys.issue(&user).expect("issue");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.id, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.name, user.full_name);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn verify_rejects_expired_token() {
        // issue with a lifetime already in the past (beyond the 60s leeway)
        let keys = make_keys("dev-secret", -25);
        let token = keys.issue(&sample_user(Role::Customer)).expect("issue");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = make_keys("secret-a", 24)
            .issue(&sample_user(Role::Admin))
            .expect("issue");
        assert!(make_keys("secret-b", 24).verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = make_keys("dev-secret", 24);
        assert!(keys.verify("not.a.jwt").is_err());
        assert!(keys.verify("").is_err());
    }
}
