use super::handlers::{
    create_food::{__path_create_food, create_food},
    delete_food::{__path_delete_food, delete_food},
    get_food::{__path_get_food, get_food},
    get_foods::{__path_get_foods, get_foods},
    update_food::{__path_update_food, update_food},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_foods, get_food, create_food, update_food, delete_food))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods", state.args.server.root_path),
            get(get_foods).post(create_food),
        )
        .route(
            &format!("{}/foods/{{food_id}}", state.args.server.root_path),
            get(get_food).put(update_food).delete(delete_food),
        )
}
