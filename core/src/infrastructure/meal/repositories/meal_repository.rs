use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError, meal::entities::Meal,
        meal::ports::MealRepository, storage::ports::KeyValueStore,
    },
    infrastructure::storage::KvCollection,
};

pub const MEALS_PREFIX: &str = "dieta_refeicoes";

#[derive(Clone)]
pub struct KvMealRepository<S: KeyValueStore> {
    meals: KvCollection<S, Meal>,
}

impl<S: KeyValueStore> KvMealRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            meals: KvCollection::new(store, MEALS_PREFIX),
        }
    }
}

impl<S: KeyValueStore> MealRepository for KvMealRepository<S> {
    async fn list(&self) -> Result<Vec<Meal>, CoreError> {
        self.meals.all().await
    }

    async fn get_by_id(&self, meal_id: Uuid) -> Result<Option<Meal>, CoreError> {
        self.meals.get(meal_id).await
    }

    async fn save(&self, meal: Meal) -> Result<Meal, CoreError> {
        self.meals.put(meal.id, &meal).await?;
        Ok(meal)
    }

    async fn delete(&self, meal_id: Uuid) -> Result<bool, CoreError> {
        self.meals.remove(meal_id).await
    }
}
