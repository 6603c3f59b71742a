use dieta_core::domain::meal::entities::MealItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMealValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "a meal needs at least one food"))]
    pub items: Vec<MealItem>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMealValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    /// Replaces every item when present.
    #[serde(default)]
    #[validate(length(min = 1, message = "a meal needs at least one food"))]
    pub items: Option<Vec<MealItem>>,
}
