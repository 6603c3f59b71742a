use chrono::{DateTime, Utc};
use dieta_core::domain::diary::entities::EntryKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_quantity() -> f64 {
    1.0
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogEntryValidator {
    /// `food` or `meal`.
    pub kind: EntryKind,

    pub item_id: Uuid,

    /// Multiple of the food serving or of the whole meal.
    #[serde(default = "default_quantity")]
    #[validate(range(exclusive_min = 0.0, message = "quantity must be greater than zero"))]
    pub quantity: f64,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogEstimateValidator {
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, message = "descricao is required"))]
    pub description: String,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
