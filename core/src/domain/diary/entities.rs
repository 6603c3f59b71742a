use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, nutrition::entities::MacroNutrients};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Food,
    Meal,
    /// Free-text description estimated by the AI service.
    Estimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub kind: EntryKind,
    /// Food or meal id. Always `None` for estimates.
    pub item_id: Option<Uuid>,
    pub description: Option<String>,
    pub quantity: f64,
    pub date: DateTime<Utc>,
    /// Already multiplied by `quantity`.
    pub macros: MacroNutrients,
}

impl DiaryEntry {
    pub fn new(
        kind: EntryKind,
        item_id: Option<Uuid>,
        description: Option<String>,
        quantity: f64,
        date: DateTime<Utc>,
        macros: MacroNutrients,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            kind,
            item_id,
            description,
            quantity,
            date,
            macros,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub entries: Vec<DiaryEntry>,
    pub totals: MacroNutrients,
}

impl DailySummary {
    pub fn new(date: NaiveDate, mut entries: Vec<DiaryEntry>) -> Self {
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        let totals = entries
            .iter()
            .map(|entry| entry.macros)
            .sum::<MacroNutrients>()
            .rounded();

        Self {
            date,
            entries,
            totals,
        }
    }
}
