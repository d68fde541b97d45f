use axum::{extract::State, middleware, routing::get, Json, Router};
use cx_types::DashboardSnapshot;

use crate::error::ApiError;
use crate::middleware::auth::{require_api_auth, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/weekly-summary", get(get_weekly_summary))
        .route_layer(middleware::from_fn_with_state(state, require_api_auth))
}

async fn get_weekly_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let services = &state.services;
    let snapshot = cx_providers::dashboard::collect(&services.backend, &services.dashboard).await?;
    Ok(Json(snapshot))
}
