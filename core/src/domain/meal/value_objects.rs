use uuid::Uuid;

use crate::domain::meal::entities::MealItem;

pub struct CreateMealInput {
    pub name: String,
    pub items: Vec<MealItem>,
}

pub struct UpdateMealInput {
    pub meal_id: Uuid,
    pub name: Option<String>,
    /// When present, replaces every item and recomputes the macros.
    pub items: Option<Vec<MealItem>>,
}
