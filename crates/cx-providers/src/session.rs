use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use cx_types::{AuthSession, SESSION_COOKIE};
use serde::Deserialize;
use time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SessionConfig {
    pub ttl_secs: u64,
    /// Adds `Secure` to the cookie. Turn off only for plain-http local development.
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 604800,
            secure_cookie: true,
        }
    }
}

/// In-memory sessions keyed by cookie token. Lost on restart.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, AuthSession>>>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub async fn create(&self, rbUserId: &str, email: &str) -> AuthSession {
        let now = chrono::Utc::now().timestamp();
        let session = AuthSession {
            token: uuid::Uuid::new_v4().simple().to_string(),
            rb_user_id: rbUserId.to_string(),
            email: email.to_string(),
            expires_at: now + self.config.ttl_secs as i64,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired(now));
        sessions.insert(session.token.clone(), session.clone());
        debug!("session created for {email}, {} active", sessions.len());

        session
    }

    /// Returns the live session for `token`; an expired one is removed.
    pub async fn get(&self, token: &str) -> Option<AuthSession> {
        let now = chrono::Utc::now().timestamp();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(s) if !s.is_expired(now) => return Some(s.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        self.sessions.write().await.remove(token);
        None
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    pub async fn purge_expired(&self) -> usize {
        let now = chrono::Utc::now().timestamp();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Looks up the session named by a raw `Cookie:` header.
    pub async fn session_from_cookies(&self, cookieHeader: &str) -> Option<AuthSession> {
        let token = extract_cookie_value(cookieHeader, SESSION_COOKIE)?;
        self.get(&token).await
    }

    pub fn set_cookie_header(&self, session: &AuthSession) -> String {
        Cookie::build((SESSION_COOKIE, session.token.clone()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.config.secure_cookie)
            .path("/")
            .max_age(Duration::seconds(self.config.ttl_secs as i64))
            .build()
            .to_string()
    }

    pub fn clear_cookie_header(&self) -> String {
        Cookie::build((SESSION_COOKIE, ""))
            .http_only(true)
            .same_site(SameSite::Strict)
            .path("/")
            .max_age(Duration::ZERO)
            .build()
            .to_string()
    }
}

pub fn extract_cookie_value(cookieHeader: &str, name: &str) -> Option<String> {
    Cookie::split_parse(cookieHeader)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
