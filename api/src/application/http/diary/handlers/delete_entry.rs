use axum::extract::{Path, State};
use dieta_core::domain::diary::ports::DiaryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteEntryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/entries/{entry_id}",
    tag = "diary",
    summary = "Delete diary entry",
    params(
        ("entry_id" = Uuid, Path, description = "Diary entry ID"),
    ),
    responses(
        (status = 200, body = DeleteEntryResponse),
        (status = 404, description = "Entry not found")
    ),
)]
pub async fn delete_entry(
    Path(entry_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteEntryResponse>, ApiError> {
    state
        .service
        .delete_entry(entry_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteEntryResponse {
        message: "Diary entry deleted successfully".to_string(),
    }))
}
