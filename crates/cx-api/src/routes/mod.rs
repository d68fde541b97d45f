pub mod summary;
pub mod users;

use axum::Router;

use crate::middleware::auth::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(users::routes(state.clone()))
        .merge(summary::routes(state))
}
