use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "session_token";

/// An authenticated login, addressed by the opaque token stored in the session cookie.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub rb_user_id: String,
    pub email: String,
    /// Unix seconds.
    pub expires_at: i64,
}

impl AuthSession {
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}
