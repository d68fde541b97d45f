use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Redirect, Response},
    routing::post,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use cx_providers::{auth, Services};
use cx_types::{LoginCredentials, LoginOutcome, SESSION_COOKIE};
use tracing::{debug, info};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

/// Server functions reachable without a session: the login form's own calls.
pub const PUBLIC_SERVER_FNS: &[&str] = &["/api/login", "/api/registered-users"];

pub fn auth_routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/login", post(handle_login))
        .route("/api/v1/auth/logout", post(handle_logout))
}

async fn handle_login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginCredentials>,
) -> Result<Response, ApiError> {
    let services = &state.services;
    let session = auth::sign_in(&services.backend, &services.sessions, credentials).await?;

    let cookieValue = services.sessions.set_cookie_header(&session);
    let mut response = Json(LoginOutcome::success()).into_response();
    if let Ok(value) = HeaderValue::from_str(&cookieValue) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }

    Ok(response)
}

async fn handle_logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if state.services.sessions.revoke(cookie.value()).await {
            info!("session revoked via api logout");
        }
    }

    let removal = Cookie::build(SESSION_COOKIE).path("/");
    (jar.remove(removal), StatusCode::NO_CONTENT)
}

fn cookie_header(request: &Request<Body>) -> String {
    request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Middleware for API routes: requires a live `session_token` cookie. The session is
/// added to the request extensions for handlers that want to know who is asking.
pub async fn require_api_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let cookies = cookie_header(&request);
    let session = state.services.sessions.session_from_cookies(&cookies).await;

    match session {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => ApiError::Unauthorized.into_response(),
    }
}

/// Paths served without a session.
pub fn is_public_path(path: &str) -> bool {
    path == "/login"
        || path == "/favicon.ico"
        || path == "/favicon.svg"
        || path.starts_with("/pkg/")
        || path.starts_with("/assets/")
        // versioned REST routes carry their own auth layer
        || path.starts_with("/api/v1/")
        || PUBLIC_SERVER_FNS.contains(&path)
}

/// Middleware for everything else: pages without a session redirect to /login,
/// server function calls without one get a 401.
pub async fn require_page_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if is_public_path(&path) {
        return next.run(request).await;
    }

    let cookies = cookie_header(&request);
    let session = state.services.sessions.session_from_cookies(&cookies).await;

    if session.is_some() {
        return next.run(request).await;
    }

    if path.starts_with("/api/") {
        debug!("rejecting unauthenticated call to {path}");
        return ApiError::Unauthorized.into_response();
    }

    Redirect::to("/login").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths() {
        for path in [
            "/login",
            "/pkg/cx-console.js",
            "/assets/logo.svg",
            "/api/login",
            "/api/registered-users",
            "/api/v1/cx-users",
        ] {
            assert!(is_public_path(path), "{path} should be public");
        }
        for path in ["/", "/dashboard", "/cx-users", "/api/cx-users", "/api/logout", "/login/extra"] {
            assert!(!is_public_path(path), "{path} should need a session");
        }
    }
}
