use std::sync::Arc;

use crate::domain::{
    diary::ports::DiaryRepository, food::ports::FoodRepository, meal::ports::MealRepository,
    nutrition::ports::LLMClient,
};

/// Aggregates every port the domain services depend on.
pub struct Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    pub(crate) food_repository: Arc<F>,
    pub(crate) meal_repository: Arc<M>,
    pub(crate) diary_repository: Arc<D>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<F, M, D, LLM> Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    pub fn new(
        food_repository: F,
        meal_repository: M,
        diary_repository: D,
        llm_client: LLM,
    ) -> Self {
        Self {
            food_repository: Arc::new(food_repository),
            meal_repository: Arc::new(meal_repository),
            diary_repository: Arc::new(diary_repository),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<F, M, D, LLM> Clone for Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            food_repository: Arc::clone(&self.food_repository),
            meal_repository: Arc::clone(&self.meal_repository),
            diary_repository: Arc::clone(&self.diary_repository),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
