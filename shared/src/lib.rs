//! Nutrition Tracker Shared Library
//!
//! The nutrition engine: daily calorie and macro goals from a user profile,
//! and per-meal and daily totals from logged food. Used by the backend and
//! WASM crates.

pub mod errors;
pub mod food;
pub mod goals;
pub mod macronutrients;
pub mod meals;
pub mod profile;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use food::TrackableFood;
pub use goals::{
    calculate_bmr_mifflin, calculate_goal_breakdown, compute_calories_goal, compute_goals,
    GoalBreakdown, NutrientGoals,
};
pub use macronutrients::{compute_macros, MacroGrams};
pub use meals::{
    aggregate, aggregate_day, overview, DailyResult, FoodEntry, FoodLogRecord, MealSummary,
    MealType, NutrientTotals,
};
pub use profile::{ActivityLevel, Gender, GoalType, MacroRatios, ProfileRecord, UserProfile};
