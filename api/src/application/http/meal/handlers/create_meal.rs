use axum::extract::State;
use dieta_core::domain::meal::{
    entities::Meal, ports::MealService, value_objects::CreateMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::meal::validators::CreateMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateMealResponse {
    pub data: Meal,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal",
    summary = "Create meal",
    description = "Adds a meal made of catalogued foods. Its macros are the sum of each food's macros times its quantity.",
    responses(
        (status = 201, body = CreateMealResponse),
        (status = 400, description = "No items, a quantity not above zero or an unknown food")
    ),
    request_body = CreateMealValidator
)]
pub async fn create_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMealValidator>,
) -> Result<Response<CreateMealResponse>, ApiError> {
    let meal = state
        .service
        .create_meal(CreateMealInput {
            name: payload.name,
            items: payload.items,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateMealResponse { data: meal }))
}
