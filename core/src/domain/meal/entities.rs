use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::entities::MacroNutrients};

/// One food of a meal, as a multiple of that food's standard serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub food_id: Uuid,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<MealItem>,
    /// Computed from the items when the meal is saved.
    pub macros: MacroNutrients,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meal {
    pub fn new(name: String, items: Vec<MealItem>, macros: MacroNutrients) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            items,
            macros,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: Option<String>, items: Vec<MealItem>, macros: MacroNutrients) {
        if let Some(name) = name {
            self.name = name;
        }
        self.items = items;
        self.macros = macros;
        self.updated_at = Utc::now();
    }
}
