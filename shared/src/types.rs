//! API request and response types

use crate::food::TrackableFood;
use crate::goals::{GoalBreakdown, NutrientGoals};
use crate::meals::FoodLogRecord;
use crate::profile::ProfileRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Goals computed for a profile, with the intermediate values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsResponse {
    pub goals: NutrientGoals,
    pub breakdown: GoalBreakdown,
}

/// Aggregate a day against goals the caller already has
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateDayRequest {
    #[serde(default)]
    pub entries: Vec<FoodLogRecord>,
    pub goals: NutrientGoals,
}

/// Compute goals and aggregate a day in one call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewRequest {
    pub profile: ProfileRecord,
    #[serde(default)]
    pub entries: Vec<FoodLogRecord>,
}

/// Log a searched food for an eaten amount
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrackFoodRequest {
    pub food: TrackableFood,
    /// Grams eaten
    #[validate(range(min = 1, max = 10000))]
    pub amount: u32,
    pub meal_type: String,
    pub date: NaiveDate,
}

/// Macro ratios as whole percentages typed into a form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RatioPercentRequest {
    #[validate(length(min = 1, max = 3))]
    pub carbs: String,
    #[validate(length(min = 1, max = 3))]
    pub protein: String,
    #[validate(length(min = 1, max = 3))]
    pub fat: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_request_defaults_entries() {
        let json = r#"{"goals": {"calories_goal": 2000, "carbs_goal": 200, "protein_goal": 150, "fat_goal": 67}}"#;
        let req: AggregateDayRequest = serde_json::from_str(json).unwrap();
        assert!(req.entries.is_empty());
        assert_eq!(req.goals.calories_goal, 2000);
    }

    #[test]
    fn test_overview_request_keeps_raw_profile() {
        let json = r#"{"profile": {
            "gender": "Female", "age_years": 35, "weight_kg": 62.0, "height_cm": 168.0,
            "activity_level": "extreme", "goal_type": "keep_weight",
            "carb_ratio": 0.5, "protein_ratio": 0.3, "fat_ratio": 0.2
        }}"#;
        let req: OverviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.profile.activity_level, "extreme");
        assert!(req.entries.is_empty());
    }

    #[test]
    fn test_track_food_request_validation() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let food = TrackableFood {
            name: "Rice".to_string(),
            image_url: None,
            calories_per_100g: 130,
            carbs_per_100g: 28.0,
            protein_per_100g: 2.7,
            fat_per_100g: 0.3,
        };
        let ok = TrackFoodRequest {
            food: food.clone(),
            amount: 200,
            meal_type: "lunch".to_string(),
            date,
        };
        assert!(ok.validate().is_ok());

        let zero = TrackFoodRequest { amount: 0, ..ok.clone() };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_ratio_request_validation() {
        let req = RatioPercentRequest {
            carbs: "40".to_string(),
            protein: "".to_string(),
            fat: "20".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_error_response_omits_empty_fields() {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "UNKNOWN_MEAL_TYPE".to_string(),
                message: "Unknown meal type: brunch".to_string(),
                field: None,
                details: None,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["error"].get("field").is_none());
        assert_eq!(json["error"]["code"], "UNKNOWN_MEAL_TYPE");
    }
}
