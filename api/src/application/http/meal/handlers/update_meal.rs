use axum::extract::{Path, State};
use dieta_core::domain::meal::{
    entities::Meal, ports::MealService, value_objects::UpdateMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::meal::validators::UpdateMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateMealResponse {
    pub data: Meal,
}

#[utoipa::path(
    put,
    path = "/{meal_id}",
    tag = "meal",
    summary = "Update meal",
    description = "Changes only the fields present in the body. Macros are recomputed from the current foods.",
    params(
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = UpdateMealResponse),
        (status = 404, description = "Meal not found")
    ),
    request_body = UpdateMealValidator
)]
pub async fn update_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateMealValidator>,
) -> Result<Response<UpdateMealResponse>, ApiError> {
    let meal = state
        .service
        .update_meal(UpdateMealInput {
            meal_id,
            name: payload.name,
            items: payload.items,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateMealResponse { data: meal }))
}
