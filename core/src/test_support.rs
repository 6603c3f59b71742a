use std::sync::Arc;

use crate::{
    domain::{common::services::Service, nutrition::ports::MockLLMClient},
    infrastructure::{
        diary::repositories::diary_repository::KvDiaryRepository,
        food::repositories::food_repository::KvFoodRepository,
        meal::repositories::meal_repository::KvMealRepository,
        storage::InMemoryKeyValueStore,
    },
};

pub type TestService = Service<
    KvFoodRepository<InMemoryKeyValueStore>,
    KvMealRepository<InMemoryKeyValueStore>,
    KvDiaryRepository<InMemoryKeyValueStore>,
    MockLLMClient,
>;

/// In-memory service whose LLM client expects no calls.
pub fn memory_service() -> TestService {
    memory_service_with(MockLLMClient::new())
}

pub fn memory_service_with(llm: MockLLMClient) -> TestService {
    let store = Arc::new(InMemoryKeyValueStore::new());

    Service::new(
        KvFoodRepository::new(Arc::clone(&store)),
        KvMealRepository::new(Arc::clone(&store)),
        KvDiaryRepository::new(store),
        llm,
    )
}
