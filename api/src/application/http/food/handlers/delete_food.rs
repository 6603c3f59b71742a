use axum::extract::{Path, State};
use dieta_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteFoodResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{food_id}",
    tag = "food",
    summary = "Delete food",
    description = "Meals that use the food keep their stored macros.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = DeleteFoodResponse),
        (status = 404, description = "Food not found")
    ),
)]
pub async fn delete_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteFoodResponse>, ApiError> {
    state
        .service
        .delete_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteFoodResponse {
        message: "Food deleted successfully".to_string(),
    }))
}
