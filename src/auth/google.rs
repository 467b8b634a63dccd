use axum::async_trait;
use serde::Deserialize;
use tracing::warn;

/// Verified identity attributes returned by Google's userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Exchanges a Google OAuth access token for a verified profile.
///
/// `Ok(None)` means Google rejected the token; `Err` is reserved for
/// transport-level failures. Stubbed out in tests.
#[async_trait]
pub trait GoogleVerifier: Send + Sync {
    async fn fetch_profile(&self, access_token: &str) -> anyhow::Result<Option<GoogleProfile>>;
}

pub struct HttpGoogleVerifier {
    client: reqwest::Client,
    userinfo_url: String,
}

impl HttpGoogleVerifier {
    pub fn new(userinfo_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            userinfo_url: userinfo_url.into(),
        }
    }
}

#[async_trait]
impl GoogleVerifier for HttpGoogleVerifier {
    async fn fetch_profile(&self, access_token: &str) -> anyhow::Result<Option<GoogleProfile>> {
        let resp = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            warn!(%status, "google rejected access token");
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("userinfo returned {}", status);
        }

        let profile: GoogleProfile = resp.json().await?;
        if profile.sub.is_empty() || profile.email.is_empty() {
            warn!("userinfo response missing sub or email");
            return Ok(None);
        }
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_userinfo_payload() {
        let json = r#"{
            "sub": "109283746",
            "email": "jane@example.com",
            "email_verified": true,
            "name": "Jane Doe",
            "picture": "https://lh3.googleusercontent.com/a/abc"
        }"#;
        let profile: GoogleProfile = serde_json::from_str(json).expect("parse");
        assert_eq!(profile.sub, "109283746");
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn profile_name_is_optional() {
        let profile: GoogleProfile =
            serde_json::from_str(r#"{"sub":"1","email":"a@b.co"}"#).expect("parse");
        assert!(profile.name.is_none());
    }
}
