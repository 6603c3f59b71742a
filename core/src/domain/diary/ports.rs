use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diary::{
        entities::{DailySummary, DiaryEntry},
        value_objects::{LogEstimateInput, LogItemInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait DiaryRepository: Send + Sync {
    /// Entries whose UTC calendar day is `date`.
    fn list_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<DiaryEntry>, CoreError>> + Send;

    fn add(&self, entry: DiaryEntry)
    -> impl Future<Output = Result<DiaryEntry, CoreError>> + Send;

    fn delete(&self, entry_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DiaryService: Send + Sync {
    fn log_item(
        &self,
        input: LogItemInput,
    ) -> impl Future<Output = Result<DiaryEntry, CoreError>> + Send;

    fn log_estimate(
        &self,
        input: LogEstimateInput,
    ) -> impl Future<Output = Result<DiaryEntry, CoreError>> + Send;

    fn get_day(&self, date: NaiveDate)
    -> impl Future<Output = Result<DailySummary, CoreError>> + Send;

    fn delete_entry(&self, entry_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
