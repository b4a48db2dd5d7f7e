//! Nutrition service - goal calculation and day aggregation
//!
//! Thin layer over the shared engine that enforces request limits and
//! records metrics. Each call recomputes from its inputs.

use crate::config::LimitsConfig;
use crate::error::ApiError;
use chrono::NaiveDate;
use nutrition_tracker_shared::types::GoalsResponse;
use nutrition_tracker_shared::{
    aggregate_day, calculate_goal_breakdown, compute_goals, DailyResult, FoodEntry,
    FoodLogRecord, MacroRatios, MealType, NutrientGoals, TrackableFood, UserProfile,
};
use tracing::debug;

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Compute daily goals for a profile
    pub fn goals(profile: &UserProfile) -> Result<GoalsResponse, ApiError> {
        let goals = compute_goals(profile)?;
        let breakdown = calculate_goal_breakdown(profile);

        metrics::counter!("nutrition_goals_computed_total").increment(1);
        debug!(
            calories_goal = goals.calories_goal,
            bmr = breakdown.bmr,
            activity_level = %profile.activity_level,
            goal_type = %profile.goal_type,
            "Computed nutrient goals"
        );

        Ok(GoalsResponse { goals, breakdown })
    }

    /// Aggregate a day's food log against existing goals
    pub fn aggregate(
        limits: &LimitsConfig,
        entries: &[FoodLogRecord],
        goals: NutrientGoals,
    ) -> Result<DailyResult, ApiError> {
        Self::check_entry_limit(limits, entries.len())?;
        Self::aggregate_checked(entries, goals)
    }

    /// Compute goals and aggregate a day in one pass
    pub fn overview(
        limits: &LimitsConfig,
        profile: &UserProfile,
        entries: &[FoodLogRecord],
    ) -> Result<DailyResult, ApiError> {
        Self::check_entry_limit(limits, entries.len())?;

        let goals = compute_goals(profile)?;
        metrics::counter!("nutrition_goals_computed_total").increment(1);

        Self::aggregate_checked(entries, goals)
    }

    fn aggregate_checked(
        entries: &[FoodLogRecord],
        goals: NutrientGoals,
    ) -> Result<DailyResult, ApiError> {
        let result = aggregate_day(entries, goals)?;

        metrics::counter!("nutrition_days_aggregated_total").increment(1);
        debug!(
            entries = entries.len(),
            total_calories = result.totals.calories,
            calories_goal = result.goals.calories_goal,
            "Aggregated day"
        );

        Ok(result)
    }

    /// Turn a searched food into a food log entry
    pub fn track_food(
        food: &TrackableFood,
        amount: u32,
        meal_type: &str,
        date: NaiveDate,
    ) -> Result<FoodEntry, ApiError> {
        let meal_type: MealType = meal_type.parse()?;
        let entry = food.track(amount, meal_type, date);

        debug!(
            food = %entry.name,
            amount,
            meal_type = %meal_type,
            calories = entry.calories,
            "Tracked food"
        );

        Ok(entry)
    }

    /// Parse macro ratios typed as whole percentages
    pub fn ratios_from_percentages(
        carbs: &str,
        protein: &str,
        fat: &str,
    ) -> Result<MacroRatios, ApiError> {
        Ok(MacroRatios::from_percent_strings(carbs, protein, fat)?)
    }

    fn check_entry_limit(limits: &LimitsConfig, count: usize) -> Result<(), ApiError> {
        if count > limits.max_entries_per_request {
            return Err(ApiError::Validation(format!(
                "At most {} entries may be sent per request (got {})",
                limits.max_entries_per_request, count
            )));
        }
        Ok(())
    }
}
