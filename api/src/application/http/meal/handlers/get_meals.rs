use axum::extract::State;
use dieta_core::domain::meal::{entities::Meal, ports::MealService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealsResponse {
    pub data: Vec<Meal>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal",
    summary = "List meals",
    description = "Returns every meal, oldest first.",
    responses(
        (status = 200, body = GetMealsResponse)
    ),
)]
pub async fn get_meals(
    State(state): State<AppState>,
) -> Result<Response<GetMealsResponse>, ApiError> {
    let meals = state.service.get_meals().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetMealsResponse { data: meals }))
}
