use std::sync::Arc;

use tracing::info;

use crate::{
    domain::common::{DietaConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        diary::repositories::diary_repository::KvDiaryRepository,
        food::repositories::food_repository::KvFoodRepository,
        llm::gemini_client::GeminiLLMClient,
        meal::repositories::meal_repository::KvMealRepository,
        storage::FileKeyValueStore,
    },
};

pub type DietaService = Service<
    KvFoodRepository<FileKeyValueStore>,
    KvMealRepository<FileKeyValueStore>,
    KvDiaryRepository<FileKeyValueStore>,
    GeminiLLMClient,
>;

pub async fn create_service(config: DietaConfig) -> Result<DietaService, CoreError> {
    let store = Arc::new(FileKeyValueStore::open(&config.storage.data_dir).await?);
    info!(data_dir = %store.data_dir().display(), "using file storage");

    if config.llm.gemini_api_key.is_none() {
        info!("GEMINI_API_KEY is not set, macro estimation is disabled");
    }

    Ok(Service::new(
        KvFoodRepository::new(Arc::clone(&store)),
        KvMealRepository::new(Arc::clone(&store)),
        KvDiaryRepository::new(store),
        GeminiLLMClient::new(&config.llm),
    ))
}
