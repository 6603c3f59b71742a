use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::{
        entities::{DailySummary, DiaryEntry, EntryKind},
        ports::{DiaryRepository, DiaryService},
        value_objects::{LogEstimateInput, LogItemInput},
    },
    food::ports::FoodRepository,
    meal::ports::MealRepository,
    nutrition::{
        ports::{LLMClient, NutritionService},
        value_objects::EstimateMacrosInput,
    },
};

impl<F, M, D, LLM> DiaryService for Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(kind = ?input.kind, item_id = %input.item_id))]
    async fn log_item(&self, input: LogItemInput) -> Result<DiaryEntry, CoreError> {
        if !input.quantity.is_finite() || input.quantity <= 0.0 {
            return Err(CoreError::Invalid(
                "quantity must be greater than zero".to_string(),
            ));
        }

        let (name, macros) = match input.kind {
            EntryKind::Food => {
                let food = self
                    .food_repository
                    .get_by_id(input.item_id)
                    .await?
                    .ok_or(CoreError::NotFound)?;
                (food.name, food.macros)
            }
            EntryKind::Meal => {
                let meal = self
                    .meal_repository
                    .get_by_id(input.item_id)
                    .await?
                    .ok_or(CoreError::NotFound)?;
                (meal.name, meal.macros)
            }
            EntryKind::Estimate => {
                return Err(CoreError::Invalid(
                    "estimates are logged from a description".to_string(),
                ));
            }
        };

        let entry = DiaryEntry::new(
            input.kind,
            Some(input.item_id),
            Some(name),
            input.quantity,
            input.date.unwrap_or_else(Utc::now),
            macros.scaled(input.quantity),
        );
        let entry = self.diary_repository.add(entry).await?;
        info!(entry_id = %entry.id, macros = %entry.macros, "diary entry logged");

        Ok(entry)
    }

    #[instrument(skip(self, input))]
    async fn log_estimate(&self, input: LogEstimateInput) -> Result<DiaryEntry, CoreError> {
        let description = input.description.trim().to_string();
        let estimate = self
            .estimate_macros(EstimateMacrosInput {
                description: description.clone(),
            })
            .await?;

        let entry = DiaryEntry::new(
            EntryKind::Estimate,
            None,
            Some(format!("{description} ({})", estimate.serving)),
            1.0,
            input.date.unwrap_or_else(Utc::now),
            estimate.macros,
        );
        let entry = self.diary_repository.add(entry).await?;
        info!(entry_id = %entry.id, macros = %entry.macros, "estimated diary entry logged");

        Ok(entry)
    }

    async fn get_day(&self, date: NaiveDate) -> Result<DailySummary, CoreError> {
        let entries = self.diary_repository.list_by_date(date).await?;

        Ok(DailySummary::new(date, entries))
    }

    #[instrument(skip(self))]
    async fn delete_entry(&self, entry_id: Uuid) -> Result<(), CoreError> {
        if !self.diary_repository.delete(entry_id).await? {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
