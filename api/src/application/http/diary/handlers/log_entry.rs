use axum::extract::State;
use dieta_core::domain::diary::{
    entities::DiaryEntry, ports::DiaryService, value_objects::LogItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::diary::validators::LogEntryValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogEntryResponse {
    pub data: DiaryEntry,
}

#[utoipa::path(
    post,
    path = "/entries",
    tag = "diary",
    summary = "Log food or meal",
    description = "Adds a catalogued food or meal to the diary, scaled by the quantity.",
    responses(
        (status = 201, body = LogEntryResponse),
        (status = 400, description = "Quantity not above zero or kind is estimate"),
        (status = 404, description = "Food or meal not found")
    ),
    request_body = LogEntryValidator
)]
pub async fn log_entry(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogEntryValidator>,
) -> Result<Response<LogEntryResponse>, ApiError> {
    let entry = state
        .service
        .log_item(LogItemInput {
            kind: payload.kind,
            item_id: payload.item_id,
            quantity: payload.quantity,
            date: payload.date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogEntryResponse { data: entry }))
}
