use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Login form values, sent as-is to the sign-in provider.
/// Checked with [`crate::validation::validate_credentials`].
#[derive(Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct LoginCredentials {
    #[serde(rename = "rbUserId")]
    #[validate(custom(function = "crate::validation::required"))]
    pub rb_user_id: String,
    #[validate(custom(function = "crate::validation::required"), email)]
    pub email: String,
    #[validate(custom(function = "crate::validation::required"), length(min = 8))]
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("rb_user_id", &self.rb_user_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a login attempt, shown to the user in the status modal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: String,
}

impl LoginOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            message: crate::messages::LOGIN_SUCCESS.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
