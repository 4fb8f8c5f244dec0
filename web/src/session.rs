//! Single source of auth state for the whole app.
//!
//! `App` calls [`provide_session`] once; components read it with
//! [`use_session`] instead of looking at browser storage themselves.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::storage;

pub const SESSION_STORAGE_KEY: &str = "eventbook_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.email.clone())
    }
}

/// Tokens and user returned by the auth provider after sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which the access token is rejected.
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl AuthSession {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Session {
    current: RwSignal<Option<AuthSession>>,
    restored: RwSignal<bool>,
}

impl Session {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            restored: RwSignal::new(false),
        }
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.current.with(|session| session.as_ref().map(|s| s.user.clone()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.current
            .with(|session| session.as_ref().map(|s| s.access_token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// False until the stored session has been read on the client.
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    pub fn sign_in(&self, session: AuthSession) {
        match serde_json::to_string(&session) {
            Ok(json) => storage::set_item(SESSION_STORAGE_KEY, &json),
            Err(e) => leptos::logging::warn!("Could not persist session: {}", e),
        }
        self.current.set(Some(session));
    }

    pub fn sign_out(&self) {
        storage::remove_item(SESSION_STORAGE_KEY);
        self.current.set(None);
    }

    fn restore(&self) {
        let stored = storage::get_item(SESSION_STORAGE_KEY)
            .and_then(|json| decode_stored_session(&json, chrono::Utc::now().timestamp()));
        if stored.is_none() {
            storage::remove_item(SESSION_STORAGE_KEY);
        }
        self.current.set(stored);
        self.restored.set(true);
    }
}

/// Parses a persisted session, discarding it when malformed or expired.
pub fn decode_stored_session(json: &str, now: i64) -> Option<AuthSession> {
    serde_json::from_str::<AuthSession>(json)
        .ok()
        .filter(|session| !session.access_token.is_empty() && !session.is_expired(now))
}

pub fn provide_session() -> Session {
    let session = Session::new();
    provide_context(session);

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| session.restore());

    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(expires_at: Option<i64>) -> AuthSession {
        AuthSession {
            access_token: "token".into(),
            refresh_token: None,
            expires_at,
            user: SessionUser {
                id: "u-1".into(),
                email: "ada@example.com".into(),
                full_name: None,
            },
        }
    }

    #[test]
    fn stored_session_round_trips_when_fresh() {
        let json = serde_json::to_string(&sample(Some(2_000))).unwrap();
        assert_eq!(decode_stored_session(&json, 1_000), Some(sample(Some(2_000))));
    }

    #[test]
    fn expired_or_garbage_sessions_are_dropped() {
        let json = serde_json::to_string(&sample(Some(500))).unwrap();
        assert_eq!(decode_stored_session(&json, 1_000), None);
        assert_eq!(decode_stored_session("{not json", 1_000), None);

        let mut empty = sample(None);
        empty.access_token.clear();
        let json = serde_json::to_string(&empty).unwrap();
        assert_eq!(decode_stored_session(&json, 1_000), None);
    }

    #[test]
    fn display_name_prefers_full_name() {
        let mut user = sample(None).user;
        assert_eq!(user.display_name(), "ada@example.com");
        user.full_name = Some("Ada Lovelace".into());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }
}
