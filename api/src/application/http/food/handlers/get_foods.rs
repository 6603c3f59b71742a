use axum::extract::State;
use dieta_core::domain::food::{entities::Food, ports::FoodService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodsResponse {
    pub data: Vec<Food>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "List foods",
    description = "Returns every catalogued food, oldest first.",
    responses(
        (status = 200, body = GetFoodsResponse)
    ),
)]
pub async fn get_foods(
    State(state): State<AppState>,
) -> Result<Response<GetFoodsResponse>, ApiError> {
    let foods = state.service.get_foods().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodsResponse { data: foods }))
}
