use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Serving label used whenever the AI response carries none.
pub const DEFAULT_SERVING: &str = "1 porção";

/// Calories (kcal) and grams of protein, carbohydrate and fat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroNutrients {
    #[serde(rename = "calorias")]
    pub calories: f64,
    #[serde(rename = "proteinas")]
    pub protein: f64,
    #[serde(rename = "carboidratos")]
    pub carbohydrates: f64,
    #[serde(rename = "gorduras")]
    pub fat: f64,
}

impl MacroNutrients {
    pub fn new(calories: f64, protein: f64, carbohydrates: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbohydrates,
            fat,
        }
    }

    /// Every field must be a finite, non-negative number.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("calorias", self.calories),
            ("proteinas", self.protein),
            ("carboidratos", self.carbohydrates),
            ("gorduras", self.fat),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Invalid(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }

        Ok(())
    }

    /// Calories to the nearest integer, grams to one decimal place.
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: round_one_decimal(self.protein),
            carbohydrates: round_one_decimal(self.carbohydrates),
            fat: round_one_decimal(self.fat),
        }
    }

    /// Multiplies every field by `factor`, then applies [`MacroNutrients::rounded`].
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbohydrates: self.carbohydrates * factor,
            fat: self.fat * factor,
        }
        .rounded()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Add for MacroNutrients {
    type Output = MacroNutrients;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sum for MacroNutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroNutrients::default(), Add::add)
    }
}

impl<'a> Sum<&'a MacroNutrients> for MacroNutrients {
    fn sum<I: Iterator<Item = &'a MacroNutrients>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for MacroNutrients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kcal | P: {}g | C: {}g | G: {}g",
            self.calories, self.protein, self.carbohydrates, self.fat
        )
    }
}

/// Record recovered from a single AI response, before any rounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientRecord {
    #[serde(rename = "calorias")]
    pub calories: f64,
    #[serde(rename = "proteinas")]
    pub protein: f64,
    #[serde(rename = "carboidratos")]
    pub carbohydrates: f64,
    #[serde(rename = "gorduras")]
    pub fat: f64,
    #[serde(rename = "porcao")]
    pub serving: String,
}

impl NutrientRecord {
    pub fn macros(&self) -> MacroNutrients {
        MacroNutrients::new(self.calories, self.protein, self.carbohydrates, self.fat)
    }

    /// Rounded macros and a serving label that is never empty.
    pub fn into_estimate(self) -> MacroEstimate {
        let macros = self.macros().rounded();
        let serving = if self.serving.trim().is_empty() {
            DEFAULT_SERVING.to_string()
        } else {
            self.serving
        };

        MacroEstimate { macros, serving }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroEstimate {
    pub macros: MacroNutrients,
    #[serde(rename = "porcao")]
    pub serving: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_keeps_integer_calories_and_one_decimal_grams() {
        let macros = MacroNutrients::new(349.6, 25.04, 40.16, 9.96).rounded();
        assert_eq!(macros, MacroNutrients::new(350.0, 25.0, 40.2, 10.0));
    }

    #[test]
    fn test_scaled_multiplies_then_rounds() {
        let macros = MacroNutrients::new(100.0, 3.4, 20.0, 1.25).scaled(1.5);
        assert_eq!(macros, MacroNutrients::new(150.0, 5.1, 30.0, 1.9));
    }

    #[test]
    fn test_sum_adds_every_field() {
        let total: MacroNutrients = [
            MacroNutrients::new(100.0, 10.0, 5.0, 1.0),
            MacroNutrients::new(50.0, 2.5, 7.0, 3.0),
        ]
        .iter()
        .sum();
        assert_eq!(total, MacroNutrients::new(150.0, 12.5, 12.0, 4.0));
    }

    #[test]
    fn test_display_format() {
        let macros = MacroNutrients::new(350.0, 25.0, 40.5, 10.0);
        assert_eq!(macros.to_string(), "350 kcal | P: 25g | C: 40.5g | G: 10g");
    }

    #[test]
    fn test_validate_rejects_negative_and_non_finite() {
        assert!(MacroNutrients::new(1.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert!(MacroNutrients::new(-1.0, 0.0, 0.0, 0.0).validate().is_err());
        assert!(MacroNutrients::new(1.0, f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_into_estimate_defaults_empty_serving() {
        let record = NutrientRecord {
            calories: 120.4,
            protein: 3.06,
            carbohydrates: 0.0,
            fat: 0.0,
            serving: "  ".to_string(),
        };
        let estimate = record.into_estimate();
        assert_eq!(estimate.serving, DEFAULT_SERVING);
        assert_eq!(estimate.macros.calories, 120.0);
        assert_eq!(estimate.macros.protein, 3.1);
    }

    #[test]
    fn test_record_serializes_with_portuguese_keys() {
        let record = NutrientRecord {
            calories: 1.0,
            protein: 2.0,
            carbohydrates: 3.0,
            fat: 4.0,
            serving: "100g".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["calorias"], 1.0);
        assert_eq!(value["porcao"], "100g");
    }
}
