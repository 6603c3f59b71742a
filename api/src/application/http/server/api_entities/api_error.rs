use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dieta_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub status: i64,
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Invalid(_) => ApiError::BadRequest(error.to_string()),
            CoreError::ServiceNotConfigured(message) => ApiError::ServiceUnavailable(message),
            CoreError::Extraction(_)
            | CoreError::ExternalServiceError(_)
            | CoreError::StorageError(_)
            | CoreError::InternalServerError => {
                error!("request failed: {}", error);
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16() as i64,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body that is deserialized and then checked with [`Validate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use dieta_core::domain::nutrition::extractor::ExtractionError;

    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::Invalid("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ServiceNotConfigured("GEMINI_API_KEY is not configured".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CoreError::Extraction(ExtractionError::NoValidJson {
                    snippet: "oi".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::ExternalServiceError("Gemini: 500".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core_error, status) in cases {
            assert_eq!(ApiError::from(core_error).status_code(), status);
        }
    }

    #[test]
    fn test_messages_are_kept_verbatim() {
        let error = ApiError::from(CoreError::Extraction(ExtractionError::NoValidJson {
            snippet: "Desculpe".to_string(),
        }));

        assert_eq!(
            error.to_string(),
            "AI response does not contain valid JSON: Desculpe"
        );
    }
}
