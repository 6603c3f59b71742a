use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::entities::MacroNutrients};

/// A catalogued food with the macros of one standard serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    /// e.g. "100g", "1 unidade"
    pub serving: String,
    pub macros: MacroNutrients,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Food {
    pub fn new(name: String, serving: String, macros: MacroNutrients) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            serving,
            macros,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        serving: Option<String>,
        macros: Option<MacroNutrients>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(serving) = serving {
            self.serving = serving;
        }
        if let Some(macros) = macros {
            self.macros = macros;
        }
        self.updated_at = Utc::now();
    }
}
