use axum::extract::{Path, State};
use dieta_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::UpdateFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::food::validators::UpdateFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateFoodResponse {
    pub data: Food,
}

#[utoipa::path(
    put,
    path = "/{food_id}",
    tag = "food",
    summary = "Update food",
    description = "Changes only the fields present in the body.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = UpdateFoodResponse),
        (status = 404, description = "Food not found")
    ),
    request_body = UpdateFoodValidator
)]
pub async fn update_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodValidator>,
) -> Result<Response<UpdateFoodResponse>, ApiError> {
    let food = state
        .service
        .update_food(UpdateFoodInput {
            food_id,
            name: payload.name,
            serving: payload.serving,
            macros: payload.macros,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateFoodResponse { data: food }))
}
