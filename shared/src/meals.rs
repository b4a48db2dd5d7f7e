//! Meal aggregation
//!
//! Groups a day's logged food by meal category and sums nutrients per meal
//! and for the whole day. Every category is always present in the result.

use crate::errors::{NutritionError, NutritionResult};
use crate::goals::{compute_goals, NutrientGoals};
use crate::profile::UserProfile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Meal category a food entry is logged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All categories in display order
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(NutritionError::UnknownMealType(s.to_string())),
        }
    }
}

/// A logged food with its meal category resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    /// Grams of carbohydrate
    pub carbs: u32,
    /// Grams of protein
    pub protein: u32,
    /// Grams of fat
    pub fat: u32,
    pub calories: u32,
    pub meal_type: MealType,
    pub date: NaiveDate,
    /// Eaten amount in grams
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A food entry as supplied by a food log, meal category not yet checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodLogRecord {
    pub name: String,
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
    pub calories: u32,
    pub meal_type: String,
    pub date: NaiveDate,
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl TryFrom<FoodLogRecord> for FoodEntry {
    type Error = NutritionError;

    fn try_from(record: FoodLogRecord) -> Result<Self, Self::Error> {
        let meal_type = record.meal_type.parse()?;
        Ok(FoodEntry {
            name: record.name,
            carbs: record.carbs,
            protein: record.protein,
            fat: record.fat,
            calories: record.calories,
            meal_type,
            date: record.date,
            amount: record.amount,
            image_url: record.image_url,
        })
    }
}

impl From<FoodEntry> for FoodLogRecord {
    fn from(entry: FoodEntry) -> Self {
        FoodLogRecord {
            name: entry.name,
            carbs: entry.carbs,
            protein: entry.protein,
            fat: entry.fat,
            calories: entry.calories,
            meal_type: entry.meal_type.as_str().to_string(),
            date: entry.date,
            amount: entry.amount,
            image_url: entry.image_url,
        }
    }
}

/// Summed nutrients over a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
    pub calories: u32,
}

/// Per-meal nutrient sums
pub type MealSummary = NutrientTotals;

impl NutrientTotals {
    fn add_entry(&mut self, entry: &FoodEntry) {
        self.carbs = self.carbs.saturating_add(entry.carbs);
        self.protein = self.protein.saturating_add(entry.protein);
        self.fat = self.fat.saturating_add(entry.fat);
        self.calories = self.calories.saturating_add(entry.calories);
    }

    fn add(&mut self, other: &NutrientTotals) {
        self.carbs = self.carbs.saturating_add(other.carbs);
        self.protein = self.protein.saturating_add(other.protein);
        self.fat = self.fat.saturating_add(other.fat);
        self.calories = self.calories.saturating_add(other.calories);
    }
}

/// Totals for one day paired with the goals they are measured against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    pub totals: NutrientTotals,
    pub goals: NutrientGoals,
    pub meals: BTreeMap<MealType, MealSummary>,
}

impl DailyResult {
    /// Summary for one meal; zeros when nothing was logged
    pub fn meal(&self, meal_type: MealType) -> MealSummary {
        self.meals.get(&meal_type).copied().unwrap_or_default()
    }

    /// Calories left before the goal is reached (negative once exceeded)
    pub fn calories_remaining(&self) -> i64 {
        i64::from(self.goals.calories_goal) - i64::from(self.totals.calories)
    }
}

/// Sum typed entries per meal and overall
pub fn aggregate(entries: &[FoodEntry], goals: NutrientGoals) -> DailyResult {
    let mut meals: BTreeMap<MealType, MealSummary> = MealType::ALL
        .iter()
        .map(|meal_type| (*meal_type, MealSummary::default()))
        .collect();

    for entry in entries {
        meals.entry(entry.meal_type).or_default().add_entry(entry);
    }

    let mut totals = NutrientTotals::default();
    for summary in meals.values() {
        totals.add(summary);
    }

    DailyResult {
        totals,
        goals,
        meals,
    }
}

/// Aggregate raw food log records for one day.
///
/// Fails on the first record with an unknown meal category; no record is
/// dropped or reassigned.
pub fn aggregate_day(records: &[FoodLogRecord], goals: NutrientGoals) -> NutritionResult<DailyResult> {
    let entries = records
        .iter()
        .cloned()
        .map(FoodEntry::try_from)
        .collect::<NutritionResult<Vec<_>>>()?;

    Ok(aggregate(&entries, goals))
}

/// Compute goals from the profile, then aggregate the day against them
pub fn overview(profile: &UserProfile, records: &[FoodLogRecord]) -> NutritionResult<DailyResult> {
    let goals = compute_goals(profile)?;
    aggregate_day(records, goals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, Gender, GoalType};
    use fake::faker::lorem::en::Word;
    use fake::Fake;
    use proptest::prelude::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn entry(meal_type: MealType, carbs: u32, protein: u32, fat: u32, calories: u32) -> FoodEntry {
        FoodEntry {
            name: "oats".to_string(),
            carbs,
            protein,
            fat,
            calories,
            meal_type,
            date: day(),
            amount: 100,
            image_url: None,
        }
    }

    fn random_entries(count: usize) -> Vec<FoodEntry> {
        (0..count)
            .map(|i| FoodEntry {
                name: Word().fake(),
                carbs: (0..100).fake(),
                protein: (0..100).fake(),
                fat: (0..100).fake(),
                calories: (0..2000).fake(),
                meal_type: MealType::ALL[(0..4usize).fake::<usize>()],
                date: day(),
                amount: 100,
                image_url: (i % 2 == 0).then(|| "https://img.example/thumb.jpg".to_string()),
            })
            .collect()
    }

    fn goals() -> NutrientGoals {
        NutrientGoals {
            calories_goal: 2220,
            carbs_goal: 222,
            protein_goal: 222,
            fat_goal: 49,
        }
    }

    #[test]
    fn test_meal_type_parse() {
        assert_eq!("breakfast".parse::<MealType>().unwrap(), MealType::Breakfast);
        assert_eq!("Lunch".parse::<MealType>().unwrap(), MealType::Lunch);
        assert_eq!("DINNER".parse::<MealType>().unwrap(), MealType::Dinner);
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snack);
        assert_eq!(
            "unknown_string".parse::<MealType>().unwrap_err(),
            NutritionError::UnknownMealType("unknown_string".to_string())
        );
    }

    #[test]
    fn test_aggregate_per_meal() {
        let entries = vec![
            entry(MealType::Breakfast, 50, 10, 5, 300),
            entry(MealType::Breakfast, 20, 5, 2, 120),
            entry(MealType::Dinner, 70, 40, 20, 700),
        ];
        let result = aggregate(&entries, goals());

        assert_eq!(
            result.meal(MealType::Breakfast),
            MealSummary { carbs: 70, protein: 15, fat: 7, calories: 420 }
        );
        assert_eq!(result.meal(MealType::Lunch), MealSummary::default());
        assert_eq!(result.meal(MealType::Dinner).calories, 700);
        assert_eq!(
            result.totals,
            NutrientTotals { carbs: 140, protein: 55, fat: 27, calories: 1120 }
        );
        assert_eq!(result.goals, goals());
        assert_eq!(result.calories_remaining(), 1100);
    }

    #[test]
    fn test_empty_day() {
        let result = aggregate(&[], goals());
        assert_eq!(result.totals, NutrientTotals::default());
        assert_eq!(result.meals.len(), 4);
        for meal_type in MealType::ALL {
            assert_eq!(result.meals[&meal_type], MealSummary::default());
        }
        assert_eq!(result.goals, goals());
    }

    #[test]
    fn test_empty_day_keeps_profile_goals() {
        let profile = UserProfile {
            gender: Gender::Female,
            age_years: 35,
            weight_kg: 62.0,
            height_cm: 168.0,
            activity_level: ActivityLevel::High,
            goal_type: GoalType::KeepWeight,
            carb_ratio: 0.5,
            protein_ratio: 0.25,
            fat_ratio: 0.25,
        };
        let result = overview(&profile, &[]).unwrap();
        assert_eq!(result.goals, compute_goals(&profile).unwrap());
        assert_eq!(result.totals, NutrientTotals::default());
    }

    #[test]
    fn test_breakfast_calories_from_random_entries() {
        let entries = random_entries(30);
        let result = aggregate(&entries, goals());

        let expected: u32 = entries
            .iter()
            .filter(|e| e.meal_type == MealType::Breakfast)
            .map(|e| e.calories)
            .sum();
        assert_eq!(result.meals[&MealType::Breakfast].calories, expected);
    }

    #[test]
    fn test_unknown_meal_type_fails_aggregate_day() {
        let mut records: Vec<FoodLogRecord> =
            random_entries(5).into_iter().map(FoodLogRecord::from).collect();
        records[3].meal_type = "unknown_string".to_string();

        let err = aggregate_day(&records, goals()).unwrap_err();
        assert_eq!(err, NutritionError::UnknownMealType("unknown_string".to_string()));
    }

    #[test]
    fn test_aggregate_day_matches_typed_aggregate() {
        let entries = random_entries(12);
        let records: Vec<FoodLogRecord> =
            entries.iter().cloned().map(FoodLogRecord::from).collect();
        assert_eq!(aggregate_day(&records, goals()).unwrap(), aggregate(&entries, goals()));
    }

    #[test]
    fn test_daily_result_json_shape() {
        let result = aggregate(&[entry(MealType::Snack, 1, 2, 3, 40)], goals());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["meals"]["snack"]["calories"], 40);
        assert_eq!(json["meals"]["breakfast"]["calories"], 0);
        assert_eq!(json["goals"]["calories_goal"], 2220);
        assert_eq!(json["totals"]["fat"], 3);
    }

    fn entry_strategy() -> impl Strategy<Value = FoodEntry> {
        (
            0u32..500,
            0u32..500,
            0u32..500,
            0u32..5000,
            prop::sample::select(MealType::ALL.to_vec()),
        )
            .prop_map(|(carbs, protein, fat, calories, meal_type)| {
                entry(meal_type, carbs, protein, fat, calories)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: day totals equal both the direct sum and the sum of meal summaries
        #[test]
        fn prop_totals_match_meal_summaries(entries in prop::collection::vec(entry_strategy(), 0..40)) {
            let result = aggregate(&entries, goals());

            let meal_calories: u32 = result.meals.values().map(|m| m.calories).sum();
            let meal_carbs: u32 = result.meals.values().map(|m| m.carbs).sum();
            prop_assert_eq!(result.totals.calories, meal_calories);
            prop_assert_eq!(result.totals.carbs, meal_carbs);

            let direct_calories: u32 = entries.iter().map(|e| e.calories).sum();
            let direct_protein: u32 = entries.iter().map(|e| e.protein).sum();
            let direct_fat: u32 = entries.iter().map(|e| e.fat).sum();
            prop_assert_eq!(result.totals.calories, direct_calories);
            prop_assert_eq!(result.totals.protein, direct_protein);
            prop_assert_eq!(result.totals.fat, direct_fat);
            prop_assert_eq!(result.meals.len(), 4);
        }

        /// Property: permuting the entries leaves the result unchanged
        #[test]
        fn prop_order_independent(
            entries in prop::collection::vec(entry_strategy(), 0..40),
            seed in any::<u64>()
        ) {
            let mut shuffled = entries.clone();
            shuffled.reverse();
            if !shuffled.is_empty() {
                let k = (seed % shuffled.len() as u64) as usize;
                shuffled.rotate_left(k);
            }
            prop_assert_eq!(aggregate(&entries, goals()), aggregate(&shuffled, goals()));
        }
    }
}
