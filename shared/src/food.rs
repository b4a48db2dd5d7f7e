//! Foods found through search, before they are logged
//!
//! Search results carry nutrient values per 100 g. Tracking a food for an
//! eaten amount scales each value and rounds it to a whole number.

use crate::meals::{FoodEntry, MealType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A food with nutrient values per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackableFood {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub calories_per_100g: u32,
    pub carbs_per_100g: f64,
    pub protein_per_100g: f64,
    pub fat_per_100g: f64,
}

fn scale(per_100g: f64, amount: u32) -> u32 {
    // Nutrient values from search are non-negative; clamp stray negatives
    (per_100g * f64::from(amount) / 100.0).round().max(0.0) as u32
}

impl TrackableFood {
    /// Turn this food into a log entry for `amount` grams eaten
    pub fn track(&self, amount: u32, meal_type: MealType, date: NaiveDate) -> FoodEntry {
        FoodEntry {
            name: self.name.clone(),
            carbs: scale(self.carbs_per_100g, amount),
            protein: scale(self.protein_per_100g, amount),
            fat: scale(self.fat_per_100g, amount),
            calories: scale(f64::from(self.calories_per_100g), amount),
            meal_type,
            date,
            amount,
            image_url: self.image_url.clone(),
        }
    }
}
