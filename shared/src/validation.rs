//! Input validation functions
//!
//! Validators return a plain message on failure; callers attach the field
//! name when converting into [`crate::NutritionError`].

/// Maximum allowed deviation of the macro ratio sum from 1.0
pub const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// Oldest age accepted for a profile
pub const MAX_AGE_YEARS: u32 = 150;

/// Validate age in years
/// Valid range: 1-150 years
pub fn validate_age_years(age_years: u32) -> Result<(), String> {
    if age_years == 0 {
        return Err("must be greater than 0".to_string());
    }
    if age_years > MAX_AGE_YEARS {
        return Err(format!("must be at most {} years", MAX_AGE_YEARS));
    }
    Ok(())
}

/// Validate weight value (in kg)
/// Valid range: 20-500 kg
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate a single macro ratio (0.0-1.0)
pub fn validate_ratio(ratio: f64) -> Result<(), String> {
    if ratio.is_nan() || ratio.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if !(0.0..=1.0).contains(&ratio) {
        return Err("must be between 0 and 1".to_string());
    }
    Ok(())
}

/// Validate that three macro ratios add up to 1.0 within [`RATIO_SUM_TOLERANCE`]
pub fn validate_ratio_sum(carbs: f64, protein: f64, fat: f64) -> Result<(), String> {
    let sum = carbs + protein + fat;
    if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
        return Err(format!("must add up to 1.0 (got {:.3})", sum));
    }
    Ok(())
}

/// Parse a whole-number percentage as typed into a form ("40", " 25 ")
pub fn parse_ratio_percent(input: &str) -> Result<u8, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("cannot be empty".to_string());
    }
    let value: u8 = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a whole percentage", trimmed))?;
    if value > 100 {
        return Err("must be between 0 and 100".to_string());
    }
    Ok(value)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "age_years" => "Age",
        "weight_kg" => "Weight",
        "height_cm" => "Height",
        "activity_level" => "Activity Level",
        "goal_type" => "Goal",
        "carb_ratio" => "Carbs",
        "protein_ratio" => "Protein",
        "fat_ratio" => "Fat",
        "ratios" => "Nutrient Ratios",
        "meal_type" => "Meal",
        "calories_goal" => "Calorie Goal",
        "carbs_goal" => "Carbs Goal",
        "protein_goal" => "Protein Goal",
        "fat_goal" => "Fat Goal",
        _ => field_name,
    }
}
