//! Calls to the hosted auth provider (sign-in, sign-up, password reset,
//! social OAuth and session lookup). The HTTP client only exists in the
//! server build; the browser reaches it through `crate::server`.

use serde::{Deserialize, Serialize};

use crate::session::{AuthSession, SessionUser};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authentication is not configured")]
    NotConfigured,
    #[error("{0}")]
    Rejected(String),
    #[error("auth request failed: {0}")]
    Transport(String),
    #[error("unexpected auth response: {0}")]
    Decode(String),
    #[error("invalid access token: {0}")]
    InvalidToken(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Github,
    Facebook,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
            OAuthProvider::Facebook => "facebook",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Github => "GitHub",
            OAuthProvider::Facebook => "Facebook",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignUpOutcome {
    SignedIn(AuthSession),
    /// The account exists but the email address must be confirmed first.
    ConfirmationRequired { email: String },
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default, alias = "name")]
    full_name: Option<String>,
}

impl From<ProviderUser> for SessionUser {
    fn from(user: ProviderUser) -> Self {
        SessionUser {
            id: user.id,
            email: user.email.unwrap_or_default(),
            full_name: user.user_metadata.full_name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: ProviderUser,
}

impl TokenResponse {
    fn into_session(self, now: i64) -> AuthSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now + secs));
        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into(),
        }
    }
}

/// The provider answers sign-up with a token pair when email confirmation is
/// off and with the bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(ProviderUser),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Picks the most readable message out of an error response body.
pub fn rejection_message(status: u16, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

pub fn oauth_authorize_url(base_url: &str, provider: OAuthProvider, redirect_to: &str) -> String {
    format!(
        "{}/auth/v1/authorize?provider={}&redirect_to={}",
        base_url,
        provider.as_str(),
        urlencoding::encode(redirect_to)
    )
}

#[cfg(feature = "ssr")]
#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: String,
}

/// Reads the user id from an access token. With a secret the signature and
/// expiry are checked; without one the claims are only decoded.
#[cfg(feature = "ssr")]
pub fn user_id_from_token(token: &str, secret: Option<&str>) -> Result<String, AuthError> {
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    let key = match secret {
        Some(secret) => DecodingKey::from_secret(secret.as_bytes()),
        None => {
            validation.insecure_disable_signature_validation();
            DecodingKey::from_secret(&[])
        }
    };

    decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims.sub)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

#[cfg(feature = "ssr")]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[cfg(feature = "ssr")]
impl AuthClient {
    pub fn from_config(config: &crate::config::AppConfig) -> Result<Self, AuthError> {
        if !config.auth_configured() {
            return Err(AuthError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.baas_url.clone(),
            api_key: config.baas_anon_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AuthError> {
        let response = request
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Rejected(rejection_message(status.as_u16(), &body)));
        }
        serde_json::from_str(&body).map_err(|e| AuthError::Decode(e.to_string()))
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let request = self
            .http
            .post(self.url("/token?grant_type=password"))
            .json(&serde_json::json!({ "email": email, "password": password }));
        let tokens: TokenResponse = self.send(request).await?;
        Ok(tokens.into_session(chrono::Utc::now().timestamp()))
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError> {
        let request = self.http.post(self.url("/signup")).json(&serde_json::json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name },
        }));
        let outcome = match self.send::<SignUpResponse>(request).await? {
            SignUpResponse::Session(tokens) => {
                SignUpOutcome::SignedIn(tokens.into_session(chrono::Utc::now().timestamp()))
            }
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationRequired {
                email: user.email.unwrap_or_else(|| email.to_string()),
            },
        };
        Ok(outcome)
    }

    pub async fn get_user(&self, access_token: &str) -> Result<SessionUser, AuthError> {
        let request = self.http.get(self.url("/user")).bearer_auth(access_token);
        let user: ProviderUser = self.send(request).await?;
        Ok(user.into())
    }

    pub async fn recover_password(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        let request = self
            .http
            .post(self.url("/recover"))
            .json(&serde_json::json!({ "email": email, "redirect_to": redirect_to }));
        self.send::<serde_json::Value>(request).await?;
        Ok(())
    }

    pub fn oauth_authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> String {
        oauth_authorize_url(&self.base_url, provider, redirect_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_becomes_session() {
        let body = r#"{
            "access_token": "abc",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "ref",
            "user": { "id": "u-1", "email": "ada@example.com", "user_metadata": { "full_name": "Ada" } }
        }"#;
        let tokens: TokenResponse = serde_json::from_str(body).unwrap();
        let session = tokens.into_session(1_000);
        assert_eq!(session.expires_at, Some(4_600));
        assert_eq!(session.user.full_name.as_deref(), Some("Ada"));
        assert_eq!(session.refresh_token.as_deref(), Some("ref"));
    }

    #[test]
    fn sign_up_without_tokens_needs_confirmation() {
        let body = r#"{ "id": "u-2", "email": "grace@example.com" }"#;
        let parsed: SignUpResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, SignUpResponse::User(ref u) if u.id == "u-2"));
    }

    #[test]
    fn rejection_message_prefers_description() {
        assert_eq!(
            rejection_message(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(rejection_message(422, r#"{"msg":"Password too short"}"#), "Password too short");
        assert_eq!(rejection_message(500, "<html>"), "Request failed with status 500");
    }

    #[test]
    fn builds_oauth_url() {
        assert_eq!(
            oauth_authorize_url("https://auth.example", OAuthProvider::Github, "http://localhost:3000/events"),
            "https://auth.example/auth/v1/authorize?provider=github&redirect_to=http%3A%2F%2Flocalhost%3A3000%2Fevents"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn reads_subject_from_signed_token() {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let claims = serde_json::json!({ "sub": "u-9", "exp": 4_102_444_800u64, "aud": "authenticated" });
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"secret")).unwrap();

        assert_eq!(user_id_from_token(&token, Some("secret")).unwrap(), "u-9");
        assert_eq!(user_id_from_token(&token, None).unwrap(), "u-9");
        assert!(user_id_from_token(&token, Some("other")).is_err());
        assert!(user_id_from_token("garbage", None).is_err());
    }
}
