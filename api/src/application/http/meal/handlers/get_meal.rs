use axum::extract::{Path, State};
use dieta_core::domain::meal::{entities::Meal, ports::MealService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealResponse {
    pub data: Meal,
}

#[utoipa::path(
    get,
    path = "/{meal_id}",
    tag = "meal",
    summary = "Get meal",
    params(
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = GetMealResponse),
        (status = 404, description = "Meal not found")
    ),
)]
pub async fn get_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetMealResponse>, ApiError> {
    let meal = state
        .service
        .get_meal(meal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealResponse { data: meal }))
}
