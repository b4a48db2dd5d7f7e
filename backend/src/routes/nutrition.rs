//! Nutrition API routes

use crate::error::ApiError;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use nutrition_tracker_shared::types::{
    AggregateDayRequest, GoalsResponse, OverviewRequest, RatioPercentRequest, TrackFoodRequest,
};
use nutrition_tracker_shared::{DailyResult, FoodEntry, MacroRatios, ProfileRecord, UserProfile};
use validator::Validate;

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/goals", post(compute_goals))
        .route("/ratios", post(parse_ratios))
        .route("/days/aggregate", post(aggregate_day))
        .route("/days/overview", post(day_overview))
        .route("/foods/track", post(track_food))
}

/// POST /api/v1/goals - Compute daily calorie and macro goals
async fn compute_goals(Json(record): Json<ProfileRecord>) -> Result<Json<GoalsResponse>, ApiError> {
    let profile = UserProfile::try_from(record)?;
    let response = NutritionService::goals(&profile)?;
    Ok(Json(response))
}

/// POST /api/v1/ratios - Convert percentage inputs to macro ratios
async fn parse_ratios(
    Json(req): Json<RatioPercentRequest>,
) -> Result<Json<MacroRatios>, ApiError> {
    req.validate()?;
    let ratios = NutritionService::ratios_from_percentages(&req.carbs, &req.protein, &req.fat)?;
    Ok(Json(ratios))
}

/// POST /api/v1/days/aggregate - Sum a day's food log against given goals
async fn aggregate_day(
    State(state): State<AppState>,
    Json(req): Json<AggregateDayRequest>,
) -> Result<Json<DailyResult>, ApiError> {
    let result = NutritionService::aggregate(&state.config().limits, &req.entries, req.goals)?;
    Ok(Json(result))
}

/// POST /api/v1/days/overview - Compute goals and sum a day's food log
async fn day_overview(
    State(state): State<AppState>,
    Json(req): Json<OverviewRequest>,
) -> Result<Json<DailyResult>, ApiError> {
    let profile = UserProfile::try_from(req.profile)?;
    let result = NutritionService::overview(&state.config().limits, &profile, &req.entries)?;
    Ok(Json(result))
}

/// POST /api/v1/foods/track - Scale a searched food to an eaten amount
async fn track_food(Json(req): Json<TrackFoodRequest>) -> Result<Json<FoodEntry>, ApiError> {
    req.validate()?;
    let entry = NutritionService::track_food(&req.food, req.amount, &req.meal_type, req.date)?;
    Ok(Json(entry))
}
