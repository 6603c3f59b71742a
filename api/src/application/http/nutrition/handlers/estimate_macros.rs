use axum::extract::State;
use dieta_core::domain::nutrition::{
    entities::MacroEstimate, ports::NutritionService, value_objects::EstimateMacrosInput,
};

use crate::application::http::nutrition::validators::EstimateMacrosValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "nutrition",
    summary = "Estimate macros",
    description = "Asks the AI service for the calories and macronutrients of a described food. Values come back rounded: calories to integers, grams to one decimal.",
    responses(
        (status = 200, body = MacroEstimate),
        (status = 400, description = "Empty description"),
        (status = 500, description = "The AI response could not be read"),
        (status = 503, description = "GEMINI_API_KEY is not configured")
    ),
    request_body = EstimateMacrosValidator
)]
pub async fn estimate_macros(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EstimateMacrosValidator>,
) -> Result<Response<MacroEstimate>, ApiError> {
    let estimate = state
        .service
        .estimate_macros(EstimateMacrosInput {
            description: payload.description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(estimate))
}
