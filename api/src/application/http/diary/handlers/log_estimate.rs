use axum::extract::State;
use dieta_core::domain::diary::{ports::DiaryService, value_objects::LogEstimateInput};

use crate::application::http::diary::{
    handlers::log_entry::LogEntryResponse, validators::LogEstimateValidator,
};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/estimates",
    tag = "diary",
    summary = "Estimate and log",
    description = "Estimates the macros of a described food with the AI service and logs them.",
    responses(
        (status = 201, body = LogEntryResponse),
        (status = 500, description = "The AI response could not be read"),
        (status = 503, description = "GEMINI_API_KEY is not configured")
    ),
    request_body = LogEstimateValidator
)]
pub async fn log_estimate(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogEstimateValidator>,
) -> Result<Response<LogEntryResponse>, ApiError> {
    let entry = state
        .service
        .log_estimate(LogEstimateInput {
            description: payload.description,
            date: payload.date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogEntryResponse { data: entry }))
}
