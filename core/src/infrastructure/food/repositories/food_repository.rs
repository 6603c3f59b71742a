use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError, food::entities::Food,
        food::ports::FoodRepository, storage::ports::KeyValueStore,
    },
    infrastructure::storage::KvCollection,
};

pub const FOODS_PREFIX: &str = "dieta_alimentos";

#[derive(Clone)]
pub struct KvFoodRepository<S: KeyValueStore> {
    foods: KvCollection<S, Food>,
}

impl<S: KeyValueStore> KvFoodRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            foods: KvCollection::new(store, FOODS_PREFIX),
        }
    }
}

impl<S: KeyValueStore> FoodRepository for KvFoodRepository<S> {
    async fn list(&self) -> Result<Vec<Food>, CoreError> {
        self.foods.all().await
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        self.foods.get(food_id).await
    }

    async fn save(&self, food: Food) -> Result<Food, CoreError> {
        self.foods.put(food.id, &food).await?;
        Ok(food)
    }

    async fn delete(&self, food_id: Uuid) -> Result<bool, CoreError> {
        self.foods.remove(food_id).await
    }
}
