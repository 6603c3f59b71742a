use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError, diary::entities::DiaryEntry,
        diary::ports::DiaryRepository, storage::ports::KeyValueStore,
    },
    infrastructure::storage::KvCollection,
};

pub const DIARY_PREFIX: &str = "dieta_diario";

#[derive(Clone)]
pub struct KvDiaryRepository<S: KeyValueStore> {
    entries: KvCollection<S, DiaryEntry>,
}

impl<S: KeyValueStore> KvDiaryRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            entries: KvCollection::new(store, DIARY_PREFIX),
        }
    }
}

impl<S: KeyValueStore> DiaryRepository for KvDiaryRepository<S> {
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>, CoreError> {
        let entries = self.entries.all().await?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.day() == date)
            .collect())
    }

    async fn add(&self, entry: DiaryEntry) -> Result<DiaryEntry, CoreError> {
        self.entries.put(entry.id, &entry).await?;
        Ok(entry)
    }

    async fn delete(&self, entry_id: Uuid) -> Result<bool, CoreError> {
        self.entries.remove(entry_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{diary::entities::EntryKind, nutrition::entities::MacroNutrients};
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_list_by_date_uses_utc_day() {
        let repository = KvDiaryRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        let late = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2026, 2, 1, 0, 1, 0).unwrap();
        for date in [late, early] {
            repository
                .add(DiaryEntry::new(
                    EntryKind::Estimate,
                    None,
                    None,
                    1.0,
                    date,
                    MacroNutrients::default(),
                ))
                .await
                .unwrap();
        }

        let february = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let entries = repository.list_by_date(february).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, early);

        let january = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let entries = repository.list_by_date(january).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, late);
    }
}
