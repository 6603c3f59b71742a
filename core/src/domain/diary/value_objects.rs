use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::diary::entities::EntryKind;

/// Logs a catalogued food or meal. `kind` must not be [`EntryKind::Estimate`].
pub struct LogItemInput {
    pub kind: EntryKind,
    pub item_id: Uuid,
    pub quantity: f64,
    /// Defaults to now.
    pub date: Option<DateTime<Utc>>,
}

pub struct LogEstimateInput {
    pub description: String,
    pub date: Option<DateTime<Utc>>,
}
