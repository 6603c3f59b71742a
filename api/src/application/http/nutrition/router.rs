use super::handlers::estimate_macros::{__path_estimate_macros, estimate_macros};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(estimate_macros))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/estimate-macros", state.args.server.root_path),
        post(estimate_macros),
    )
}
