use dieta_core::domain::nutrition::entities::MacroNutrients;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Standard serving the macros refer to, e.g. "100g".
    #[validate(length(min = 1, message = "serving is required"))]
    pub serving: String,

    pub macros: MacroNutrients,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "serving must not be empty"))]
    pub serving: Option<String>,

    #[serde(default)]
    pub macros: Option<MacroNutrients>,
}
