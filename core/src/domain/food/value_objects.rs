use uuid::Uuid;

use crate::domain::nutrition::entities::MacroNutrients;

pub struct CreateFoodInput {
    pub name: String,
    pub serving: String,
    pub macros: MacroNutrients,
}

pub struct UpdateFoodInput {
    pub food_id: Uuid,
    pub name: Option<String>,
    pub serving: Option<String>,
    pub macros: Option<MacroNutrients>,
}
