use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct EstimateMacrosValidator {
    /// What was eaten, in free text.
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, message = "descricao is required"))]
    pub description: String,
}
