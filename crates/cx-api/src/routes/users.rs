use axum::{extract::State, middleware, routing::get, Json, Router};
use cx_types::CxUser;

use crate::error::ApiError;
use crate::middleware::auth::{require_api_auth, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/cx-users", get(get_cx_users))
        .route_layer(middleware::from_fn_with_state(state, require_api_auth))
}

async fn get_cx_users(State(state): State<AppState>) -> Result<Json<Vec<CxUser>>, ApiError> {
    let users = state.services.backend.fetch_cx_users().await?;
    Ok(Json(users))
}
