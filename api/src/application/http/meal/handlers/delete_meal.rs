use axum::extract::{Path, State};
use dieta_core::domain::meal::ports::MealService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteMealResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{meal_id}",
    tag = "meal",
    summary = "Delete meal",
    description = "Diary entries that logged the meal keep their macros.",
    params(
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = DeleteMealResponse),
        (status = 404, description = "Meal not found")
    ),
)]
pub async fn delete_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteMealResponse>, ApiError> {
    state
        .service
        .delete_meal(meal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteMealResponse {
        message: "Meal deleted successfully".to_string(),
    }))
}
