use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use cx_providers::auth::LoginError;
use cx_providers::ProviderError;
use cx_types::messages;
use cx_types::validation::FieldErrors;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Upstream(#[from] ProviderError),

    #[error("unauthorized")]
    Unauthorized,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Login(LoginError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Login(LoginError::Unregistered(_)) => StatusCode::FORBIDDEN,
            ApiError::Login(LoginError::Rejected(_)) | ApiError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Login(LoginError::Network(_)) | ApiError::Upstream(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Login(LoginError::Invalid(fields)) => ErrorResponse {
                error: messages::INVALID_FORM.into(),
                fields: Some(fields),
            },
            ApiError::Login(e) => ErrorResponse::new(e.user_message()),
            ApiError::Upstream(e) => {
                warn!("upstream request failed: {e}");
                ErrorResponse::new(messages::NETWORK_ERROR)
            }
            ApiError::Unauthorized => ErrorResponse::new("unauthorized"),
        };

        (status, Json(body)).into_response()
    }
}
