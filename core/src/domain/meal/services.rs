use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::DiaryRepository,
    food::ports::FoodRepository,
    meal::{
        entities::{Meal, MealItem},
        helpers::calculate_meal_macros,
        ports::{MealRepository, MealService},
        value_objects::{CreateMealInput, UpdateMealInput},
    },
    nutrition::{entities::MacroNutrients, ports::LLMClient},
};

impl<F, M, D, LLM> Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    /// Checks the items against the catalog and returns their summed macros.
    async fn compute_meal_macros(&self, items: &[MealItem]) -> Result<MacroNutrients, CoreError> {
        if items.is_empty() {
            return Err(CoreError::Invalid(
                "a meal needs at least one food".to_string(),
            ));
        }

        if let Some(item) = items
            .iter()
            .find(|item| !item.quantity.is_finite() || item.quantity <= 0.0)
        {
            return Err(CoreError::Invalid(format!(
                "quantity of food {} must be greater than zero",
                item.food_id
            )));
        }

        let foods = self.food_repository.list().await?;
        if let Some(item) = items
            .iter()
            .find(|item| !foods.iter().any(|food| food.id == item.food_id))
        {
            return Err(CoreError::Invalid(format!(
                "food {} does not exist",
                item.food_id
            )));
        }

        Ok(calculate_meal_macros(&foods, items))
    }
}

impl<F, M, D, LLM> MealService for Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    async fn get_meals(&self) -> Result<Vec<Meal>, CoreError> {
        let mut meals = self.meal_repository.list().await?;
        meals.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(meals)
    }

    async fn get_meal(&self, meal_id: Uuid) -> Result<Meal, CoreError> {
        self.meal_repository
            .get_by_id(meal_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_meal(&self, input: CreateMealInput) -> Result<Meal, CoreError> {
        let macros = self.compute_meal_macros(&input.items).await?;

        let meal = Meal::new(input.name, input.items, macros);
        let meal = self.meal_repository.save(meal).await?;
        info!(meal_id = %meal.id, %macros, "meal created");

        Ok(meal)
    }

    #[instrument(skip(self, input), fields(meal_id = %input.meal_id))]
    async fn update_meal(&self, input: UpdateMealInput) -> Result<Meal, CoreError> {
        let mut meal = self
            .meal_repository
            .get_by_id(input.meal_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let (items, macros) = match input.items {
            Some(items) => {
                let macros = self.compute_meal_macros(&items).await?;
                (items, macros)
            }
            None => {
                // Items referring to deleted foods are kept and contribute nothing.
                let foods = self.food_repository.list().await?;
                let macros = calculate_meal_macros(&foods, &meal.items);
                (meal.items.clone(), macros)
            }
        };
        meal.update(input.name, items, macros);

        self.meal_repository.save(meal).await
    }

    #[instrument(skip(self))]
    async fn delete_meal(&self, meal_id: Uuid) -> Result<(), CoreError> {
        if !self.meal_repository.delete(meal_id).await? {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
