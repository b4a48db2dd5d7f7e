//! Daily calorie goal calculation
//!
//! BMR (Mifflin-St Jeor) × activity multiplier × goal factor, rounded to a
//! whole calorie. All functions are pure.

use crate::errors::{NutritionError, NutritionResult};
use crate::macronutrients::compute_macros;
use crate::profile::{Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Daily targets derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NutrientGoals {
    pub calories_goal: u32,
    pub carbs_goal: u32,
    pub protein_goal: u32,
    pub fat_goal: u32,
}

/// Intermediate values of the calorie goal calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalBreakdown {
    /// Basal Metabolic Rate in kcal
    pub bmr: f64,
    /// BMR × activity multiplier
    pub activity_adjusted: f64,
    /// Activity-adjusted value × goal factor, before rounding
    pub goal_adjusted: f64,
    pub activity_multiplier: f64,
    pub goal_factor: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Run the calorie calculation without rounding
pub fn calculate_goal_breakdown(profile: &UserProfile) -> GoalBreakdown {
    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let activity_multiplier = profile.activity_level.multiplier();
    let goal_factor = profile.goal_type.calorie_factor();
    let activity_adjusted = bmr * activity_multiplier;

    GoalBreakdown {
        bmr,
        activity_adjusted,
        goal_adjusted: activity_adjusted * goal_factor,
        activity_multiplier,
        goal_factor,
    }
}

/// Round to the nearest whole unit, reporting values outside the `u32` range
pub(crate) fn round_non_negative(quantity: &'static str, value: f64) -> NutritionResult<u32> {
    let rounded = value.round();
    if rounded < 0.0 {
        return Err(NutritionError::NegativeResult {
            quantity,
            raw: value,
            clamped: 0,
        });
    }
    if rounded.is_nan() || rounded > f64::from(u32::MAX) {
        return Err(NutritionError::OutOfRange { quantity, raw: value });
    }
    Ok(rounded as u32)
}

/// Daily calorie goal for a validated profile
pub fn compute_calories_goal(profile: &UserProfile) -> NutritionResult<u32> {
    profile.validate()?;
    let breakdown = calculate_goal_breakdown(profile);
    round_non_negative("calories_goal", breakdown.goal_adjusted)
}

/// Calorie goal plus macro gram targets for a profile
pub fn compute_goals(profile: &UserProfile) -> NutritionResult<NutrientGoals> {
    let calories_goal = compute_calories_goal(profile)?;
    let grams = compute_macros(calories_goal, &profile.ratios())?;

    Ok(NutrientGoals {
        calories_goal,
        carbs_goal: grams.carbs,
        protein_goal: grams.protein,
        fat_goal: grams.fat,
    })
}
