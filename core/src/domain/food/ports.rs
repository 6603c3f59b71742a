use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::Food,
        value_objects::{CreateFoodInput, UpdateFoodInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_by_id(&self, food_id: Uuid)
    -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    /// Inserts the food, or replaces the one with the same id.
    fn save(&self, food: Food) -> impl Future<Output = Result<Food, CoreError>> + Send;

    /// Returns whether a food was removed.
    fn delete(&self, food_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn get_foods(&self) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(&self, food_id: Uuid) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn create_food(
        &self,
        input: CreateFoodInput,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn update_food(
        &self,
        input: UpdateFoodInput,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn delete_food(&self, food_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
