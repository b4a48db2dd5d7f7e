//! Error types for the nutrition engine

use thiserror::Error;

/// Errors produced by goal calculation and meal aggregation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NutritionError {
    /// The profile cannot be used for calculation
    #[error("Invalid profile: {field} {reason}")]
    InvalidProfile { field: &'static str, reason: String },

    /// A food entry names a meal category outside the known four
    #[error("Unknown meal type: {0}")]
    UnknownMealType(String),

    /// A computed goal or gram value came out below zero.
    /// `clamped` is the value a caller may substitute (always 0).
    #[error("Negative result for {quantity}: {raw} (clamped to {clamped})")]
    NegativeResult {
        quantity: &'static str,
        raw: f64,
        clamped: u32,
    },

    /// A computed goal or gram value does not fit in a `u32`
    #[error("Result for {quantity} is too large: {raw}")]
    OutOfRange { quantity: &'static str, raw: f64 },
}

impl NutritionError {
    pub(crate) fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        NutritionError::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            NutritionError::InvalidProfile { .. } => "INVALID_PROFILE",
            NutritionError::UnknownMealType(_) => "UNKNOWN_MEAL_TYPE",
            NutritionError::NegativeResult { .. } => "NEGATIVE_RESULT",
            NutritionError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            NutritionError::InvalidProfile { field, .. } => Some(field),
            NutritionError::UnknownMealType(_) => Some("meal_type"),
            NutritionError::NegativeResult { quantity, .. } => Some(quantity),
            NutritionError::OutOfRange { quantity, .. } => Some(quantity),
        }
    }
}

/// Result alias used across the engine
pub type NutritionResult<T> = Result<T, NutritionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NutritionError::invalid_profile("age_years", "must be greater than 0");
        assert_eq!(err.to_string(), "Invalid profile: age_years must be greater than 0");

        let err = NutritionError::UnknownMealType("brunch".to_string());
        assert_eq!(err.to_string(), "Unknown meal type: brunch");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            NutritionError::invalid_profile("weight_kg", "x").code(),
            "INVALID_PROFILE"
        );
        assert_eq!(
            NutritionError::UnknownMealType(String::new()).code(),
            "UNKNOWN_MEAL_TYPE"
        );
        let negative = NutritionError::NegativeResult {
            quantity: "calories_goal",
            raw: -12.0,
            clamped: 0,
        };
        assert_eq!(negative.code(), "NEGATIVE_RESULT");
        assert_eq!(negative.field(), Some("calories_goal"));

        let too_large = NutritionError::OutOfRange {
            quantity: "carbs_goal",
            raw: 1e12,
        };
        assert_eq!(too_large.code(), "OUT_OF_RANGE");
        assert_eq!(too_large.field(), Some("carbs_goal"));
    }
}
