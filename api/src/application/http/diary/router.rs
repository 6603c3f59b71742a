use super::handlers::{
    delete_entry::{__path_delete_entry, delete_entry},
    get_day::{__path_get_day, get_day},
    log_entry::{__path_log_entry, log_entry},
    log_estimate::{__path_log_estimate, log_estimate},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_day, log_entry, log_estimate, delete_entry))]
pub struct DiaryApiDoc;

pub fn diary_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diary", state.args.server.root_path),
            get(get_day),
        )
        .route(
            &format!("{}/diary/entries", state.args.server.root_path),
            post(log_entry),
        )
        .route(
            &format!("{}/diary/estimates", state.args.server.root_path),
            post(log_estimate),
        )
        .route(
            &format!("{}/diary/entries/{{entry_id}}", state.args.server.root_path),
            delete(delete_entry),
        )
}
