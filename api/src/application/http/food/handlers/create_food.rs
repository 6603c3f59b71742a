use axum::extract::State;
use dieta_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::CreateFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::food::validators::CreateFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFoodResponse {
    pub data: Food,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food",
    summary = "Create food",
    description = "Adds a food with the macros of one standard serving.",
    responses(
        (status = 201, body = CreateFoodResponse),
        (status = 400, description = "Missing name or serving, or negative macros")
    ),
    request_body = CreateFoodValidator
)]
pub async fn create_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodValidator>,
) -> Result<Response<CreateFoodResponse>, ApiError> {
    let food = state
        .service
        .create_food(CreateFoodInput {
            name: payload.name,
            serving: payload.serving,
            macros: payload.macros,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateFoodResponse { data: food }))
}
