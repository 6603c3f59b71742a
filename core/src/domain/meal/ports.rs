use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{
        entities::Meal,
        value_objects::{CreateMealInput, UpdateMealInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Meal>, CoreError>> + Send;

    fn get_by_id(&self, meal_id: Uuid)
    -> impl Future<Output = Result<Option<Meal>, CoreError>> + Send;

    fn save(&self, meal: Meal) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn delete(&self, meal_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealService: Send + Sync {
    fn get_meals(&self) -> impl Future<Output = Result<Vec<Meal>, CoreError>> + Send;

    fn get_meal(&self, meal_id: Uuid) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn create_meal(
        &self,
        input: CreateMealInput,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn update_meal(
        &self,
        input: UpdateMealInput,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn delete_meal(&self, meal_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
