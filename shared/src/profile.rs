//! User profile types
//!
//! The biometric profile drives goal calculation. Enumerations parse from the
//! strings stored by the onboarding flow ("male", "medium", "lose_weight"),
//! ignoring case. [`ProfileRecord`] is the unchecked form callers send.

use crate::errors::{NutritionError, NutritionResult};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(NutritionError::invalid_profile(
                "gender",
                format!("'{}' is not one of: male, female", other),
            )),
        }
    }
}

/// Activity level for the energy expenditure estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// Moderate exercise a few days a week
    Medium,
    /// Hard exercise or a physical job
    High,
}

impl ActivityLevel {
    /// Multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.55,
            ActivityLevel::High => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ActivityLevel::Low),
            "medium" => Ok(ActivityLevel::Medium),
            "high" => Ok(ActivityLevel::High),
            other => Err(NutritionError::invalid_profile(
                "activity_level",
                format!("'{}' is not one of: low, medium, high", other),
            )),
        }
    }
}

/// Weight goal, applied as a factor on top of the activity-adjusted BMR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    LoseWeight,
    KeepWeight,
    GainWeight,
}

impl GoalType {
    /// 20% deficit, maintenance, or 20% surplus
    pub fn calorie_factor(&self) -> f64 {
        match self {
            GoalType::LoseWeight => 0.8,
            GoalType::KeepWeight => 1.0,
            GoalType::GainWeight => 1.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::LoseWeight => "lose_weight",
            GoalType::KeepWeight => "keep_weight",
            GoalType::GainWeight => "gain_weight",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" | "loseweight" => Ok(GoalType::LoseWeight),
            "keep_weight" | "keepweight" => Ok(GoalType::KeepWeight),
            "gain_weight" | "gainweight" => Ok(GoalType::GainWeight),
            other => Err(NutritionError::invalid_profile(
                "goal_type",
                format!(
                    "'{}' is not one of: lose_weight, keep_weight, gain_weight",
                    other
                ),
            )),
        }
    }
}

/// Fractions of daily calories targeted from each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroRatios {
    /// Build ratios from whole percentages typed into the onboarding form.
    ///
    /// Each value must be an integer 0-100 and the three must total exactly 100.
    pub fn from_percent_strings(carbs: &str, protein: &str, fat: &str) -> NutritionResult<Self> {
        let carbs_pct = validation::parse_ratio_percent(carbs)
            .map_err(|reason| NutritionError::invalid_profile("carb_ratio", reason))?;
        let protein_pct = validation::parse_ratio_percent(protein)
            .map_err(|reason| NutritionError::invalid_profile("protein_ratio", reason))?;
        let fat_pct = validation::parse_ratio_percent(fat)
            .map_err(|reason| NutritionError::invalid_profile("fat_ratio", reason))?;

        let total = u32::from(carbs_pct) + u32::from(protein_pct) + u32::from(fat_pct);
        if total != 100 {
            return Err(NutritionError::invalid_profile(
                "ratios",
                format!("must add up to 100% (got {}%)", total),
            ));
        }

        Ok(Self {
            carbs: f64::from(carbs_pct) / 100.0,
            protein: f64::from(protein_pct) / 100.0,
            fat: f64::from(fat_pct) / 100.0,
        })
    }

    /// Check every ratio is in [0,1] and the sum is within tolerance of 1.0
    pub fn validate(&self) -> NutritionResult<()> {
        validation::validate_ratio(self.carbs)
            .map_err(|reason| NutritionError::invalid_profile("carb_ratio", reason))?;
        validation::validate_ratio(self.protein)
            .map_err(|reason| NutritionError::invalid_profile("protein_ratio", reason))?;
        validation::validate_ratio(self.fat)
            .map_err(|reason| NutritionError::invalid_profile("fat_ratio", reason))?;
        validation::validate_ratio_sum(self.carbs, self.protein, self.fat)
            .map_err(|reason| NutritionError::invalid_profile("ratios", reason))
    }
}

/// Biometric profile supplied by the onboarding flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal_type: GoalType,
    pub carb_ratio: f64,
    pub protein_ratio: f64,
    pub fat_ratio: f64,
}

impl UserProfile {
    pub fn ratios(&self) -> MacroRatios {
        MacroRatios {
            carbs: self.carb_ratio,
            protein: self.protein_ratio,
            fat: self.fat_ratio,
        }
    }

    /// Reject profiles the calculators cannot use.
    ///
    /// Ratios are never re-normalized: a sum outside
    /// [`validation::RATIO_SUM_TOLERANCE`] is an error.
    pub fn validate(&self) -> NutritionResult<()> {
        validation::validate_age_years(self.age_years)
            .map_err(|reason| NutritionError::invalid_profile("age_years", reason))?;
        validation::validate_weight_kg(self.weight_kg)
            .map_err(|reason| NutritionError::invalid_profile("weight_kg", reason))?;
        validation::validate_height_cm(self.height_cm)
            .map_err(|reason| NutritionError::invalid_profile("height_cm", reason))?;
        self.ratios().validate()
    }
}

/// A profile as supplied by a caller, categories not yet checked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub gender: String,
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: String,
    pub goal_type: String,
    pub carb_ratio: f64,
    pub protein_ratio: f64,
    pub fat_ratio: f64,
}

impl TryFrom<ProfileRecord> for UserProfile {
    type Error = NutritionError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            gender: record.gender.parse()?,
            age_years: record.age_years,
            weight_kg: record.weight_kg,
            height_cm: record.height_cm,
            activity_level: record.activity_level.parse()?,
            goal_type: record.goal_type.parse()?,
            carb_ratio: record.carb_ratio,
            protein_ratio: record.protein_ratio,
            fat_ratio: record.fat_ratio,
        })
    }
}

impl From<UserProfile> for ProfileRecord {
    fn from(profile: UserProfile) -> Self {
        ProfileRecord {
            gender: profile.gender.to_string(),
            age_years: profile.age_years,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            activity_level: profile.activity_level.to_string(),
            goal_type: profile.goal_type.to_string(),
            carb_ratio: profile.carb_ratio,
            protein_ratio: profile.protein_ratio,
            fat_ratio: profile.fat_ratio,
        }
    }
}
