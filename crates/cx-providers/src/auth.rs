use cx_types::validation::{is_registered, validate_credentials, FieldErrors};
use cx_types::{messages, AuthSession, LoginCredentials};
use thiserror::Error;
use tracing::{info, warn};

use crate::backend::BackendClient;
use crate::error::ProviderError;
use crate::session::SessionStore;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("login form is invalid")]
    Invalid(FieldErrors),

    #[error("{0} is not a registered email")]
    Unregistered(String),

    #[error("sign-in rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Network(ProviderError),
}

impl LoginError {
    /// Text for the login status modal. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Invalid(_) => messages::INVALID_FORM.into(),
            LoginError::Unregistered(_) => messages::EMAIL_UNREGISTERED.into(),
            LoginError::Rejected(reason) => reason.clone(),
            LoginError::Network(_) => messages::NETWORK_ERROR.into(),
        }
    }
}

/// Full login: validate, check the registered list, ask the provider, open a session.
pub async fn sign_in(
    backend: &BackendClient,
    sessions: &SessionStore,
    credentials: LoginCredentials,
) -> Result<AuthSession, LoginError> {
    validate_credentials(&credentials).map_err(LoginError::Invalid)?;

    let registered = backend
        .fetch_registered_users()
        .await
        .map_err(LoginError::Network)?;

    if !is_registered(&registered, &credentials.email) {
        info!("login refused, unregistered email {}", credentials.email);
        return Err(LoginError::Unregistered(credentials.email));
    }

    match backend.sign_in(&credentials).await {
        Ok(()) => {}
        Err(ProviderError::Rejected(reason)) => {
            info!("sign-in provider rejected {}: {reason}", credentials.email);
            return Err(LoginError::Rejected(reason));
        }
        Err(e) => {
            warn!("sign-in provider unavailable: {e}");
            return Err(LoginError::Network(e));
        }
    }

    let session = sessions
        .create(&credentials.rb_user_id, &credentials.email)
        .await;
    info!("{} signed in", session.email);

    Ok(session)
}
