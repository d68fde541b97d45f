use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::messages;
use crate::LoginCredentials;

/// Per-field validation messages for the login form. `None` means the field is valid.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldErrors {
    pub rb_user_id: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.rb_user_id.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Checks the login form. Each field reports only its first failing rule, and an
/// empty field is always reported as required.
pub fn validate_credentials(credentials: &LoginCredentials) -> Result<(), FieldErrors> {
    let Err(report) = credentials.validate() else {
        return Ok(());
    };
    let failed = report.field_errors();

    // serde-renamed fields may be reported under their wire name
    let codesFor = |names: &[&str]| -> Vec<String> {
        failed
            .iter()
            .filter(|(field, _)| {
                let field: &str = field;
                names.contains(&field)
            })
            .flat_map(|(_, errors)| errors.iter().map(|e| e.code.to_string()))
            .collect()
    };
    let firstMessage = |names: &[&str], rules: &[(&str, &str)]| -> Option<String> {
        let codes = codesFor(names);
        rules
            .iter()
            .find(|(code, _)| codes.iter().any(|c| c == code))
            .map(|(_, message)| message.to_string())
    };

    let errors = FieldErrors {
        rb_user_id: firstMessage(
            &["rb_user_id", "rbUserId"],
            &[(REQUIRED, messages::RB_USER_ID_REQUIRED)],
        ),
        email: firstMessage(
            &["email"],
            &[
                (REQUIRED, messages::EMAIL_REQUIRED),
                ("email", messages::EMAIL_INVALID),
            ],
        ),
        password: firstMessage(
            &["password"],
            &[
                (REQUIRED, messages::PASSWORD_REQUIRED),
                ("length", messages::PASSWORD_TOO_SHORT),
            ],
        ),
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

const REQUIRED: &str = "required";

/// Presence rule for the form's string fields.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Exact, case-sensitive membership in the registered email list.
pub fn is_registered(registered: &[String], email: &str) -> bool {
    registered.iter().any(|e| e == email)
}
