//! Macronutrient allocation
//!
//! Splits a calorie goal into gram targets. Each macro is rounded on its
//! own; ratios are used as given.

use crate::errors::NutritionResult;
use crate::goals::round_non_negative;
use crate::profile::MacroRatios;
use serde::{Deserialize, Serialize};

pub const KCAL_PER_GRAM_CARBS: u32 = 4;
pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;
pub const KCAL_PER_GRAM_FAT: u32 = 9;

/// Gram targets per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroGrams {
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
}

impl MacroGrams {
    /// Calories implied by these grams, widened so any gram values fit
    pub fn calories(&self) -> u64 {
        u64::from(self.carbs) * u64::from(KCAL_PER_GRAM_CARBS)
            + u64::from(self.protein) * u64::from(KCAL_PER_GRAM_PROTEIN)
            + u64::from(self.fat) * u64::from(KCAL_PER_GRAM_FAT)
    }
}

/// Allocate a calorie goal across carbs, protein and fat
pub fn compute_macros(calories_goal: u32, ratios: &MacroRatios) -> NutritionResult<MacroGrams> {
    let calories = f64::from(calories_goal);

    Ok(MacroGrams {
        carbs: round_non_negative(
            "carbs_goal",
            calories * ratios.carbs / f64::from(KCAL_PER_GRAM_CARBS),
        )?,
        protein: round_non_negative(
            "protein_goal",
            calories * ratios.protein / f64::from(KCAL_PER_GRAM_PROTEIN),
        )?,
        fat: round_non_negative(
            "fat_goal",
            calories * ratios.fat / f64::from(KCAL_PER_GRAM_FAT),
        )?,
    })
}
