use crate::domain::{
    food::entities::Food,
    meal::entities::MealItem,
    nutrition::entities::MacroNutrients,
};

/// Sums `food.macros * quantity` over the items. Items whose food is unknown are skipped.
pub fn calculate_meal_macros(foods: &[Food], items: &[MealItem]) -> MacroNutrients {
    items
        .iter()
        .filter_map(|item| {
            foods
                .iter()
                .find(|food| food.id == item.food_id)
                .map(|food| {
                    let m = food.macros;
                    MacroNutrients::new(
                        m.calories * item.quantity,
                        m.protein * item.quantity,
                        m.carbohydrates * item.quantity,
                        m.fat * item.quantity,
                    )
                })
        })
        .sum()
}
