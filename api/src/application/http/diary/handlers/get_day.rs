use axum::extract::{Query, State};
use chrono::{NaiveDate, Utc};
use dieta_core::domain::diary::{entities::DailySummary, ports::DiaryService};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetDayQuery {
    /// `YYYY-MM-DD`, today (UTC) when absent.
    pub date: Option<NaiveDate>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diary",
    summary = "Get day",
    description = "Entries logged on a UTC calendar day with their summed macros.",
    params(GetDayQuery),
    responses(
        (status = 200, body = DailySummary)
    ),
)]
pub async fn get_day(
    Query(query): Query<GetDayQuery>,
    State(state): State<AppState>,
) -> Result<Response<DailySummary>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let summary = state.service.get_day(date).await.map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
