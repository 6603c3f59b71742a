use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::DiaryRepository,
    food::{
        entities::Food,
        ports::{FoodRepository, FoodService},
        value_objects::{CreateFoodInput, UpdateFoodInput},
    },
    meal::ports::MealRepository,
    nutrition::ports::LLMClient,
};

impl<F, M, D, LLM> FoodService for Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    async fn get_foods(&self) -> Result<Vec<Food>, CoreError> {
        let mut foods = self.food_repository.list().await?;
        foods.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(foods)
    }

    async fn get_food(&self, food_id: Uuid) -> Result<Food, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_food(&self, input: CreateFoodInput) -> Result<Food, CoreError> {
        input.macros.validate()?;

        let food = Food::new(input.name, input.serving, input.macros);
        let food = self.food_repository.save(food).await?;
        info!(food_id = %food.id, "food created");

        Ok(food)
    }

    #[instrument(skip(self, input), fields(food_id = %input.food_id))]
    async fn update_food(&self, input: UpdateFoodInput) -> Result<Food, CoreError> {
        if let Some(macros) = &input.macros {
            macros.validate()?;
        }

        let mut food = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        food.update(input.name, input.serving, input.macros);

        self.food_repository.save(food).await
    }

    #[instrument(skip(self))]
    async fn delete_food(&self, food_id: Uuid) -> Result<(), CoreError> {
        if !self.food_repository.delete(food_id).await? {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::MacroNutrients;
    use crate::test_support::memory_service;

    fn banana() -> CreateFoodInput {
        CreateFoodInput {
            name: "Banana".to_string(),
            serving: "1 unidade".to_string(),
            macros: MacroNutrients::new(89.0, 1.1, 22.8, 0.3),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_food() {
        let service = memory_service();

        let created = service.create_food(banana()).await.unwrap();
        let fetched = service.get_food(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(service.get_foods().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_food_keeps_unset_fields() {
        let service = memory_service();
        let created = service.create_food(banana()).await.unwrap();

        let updated = service
            .update_food(UpdateFoodInput {
                food_id: created.id,
                name: Some("Banana prata".to_string()),
                serving: None,
                macros: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Banana prata");
        assert_eq!(updated.serving, "1 unidade");
        assert_eq!(updated.macros, created.macros);
    }

    #[tokio::test]
    async fn test_create_food_rejects_negative_macros() {
        let service = memory_service();
        let mut input = banana();
        input.macros.fat = -1.0;

        assert!(matches!(
            service.create_food(input).await,
            Err(CoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_food() {
        let service = memory_service();
        let created = service.create_food(banana()).await.unwrap();

        service.delete_food(created.id).await.unwrap();

        assert!(matches!(
            service.get_food(created.id).await,
            Err(CoreError::NotFound)
        ));
        assert!(matches!(
            service.delete_food(created.id).await,
            Err(CoreError::NotFound)
        ));
    }
}
