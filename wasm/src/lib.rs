//! Nutrition Tracker WASM Module
//!
//! WebAssembly bindings so the browser can run goal and aggregation
//! calculations without a round trip to the backend. Every function takes
//! and returns JSON strings; failures surface as thrown JS strings.

use nutrition_tracker_shared::{FoodLogRecord, NutrientGoals, ProfileRecord, UserProfile};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

fn parse<T: DeserializeOwned>(what: &str, json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid {}: {}", what, e))
}

fn render<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn goals_from_profile(profile_json: &str) -> Result<String, String> {
    let record: ProfileRecord = parse("profile", profile_json)?;
    let profile = UserProfile::try_from(record).map_err(|e| e.to_string())?;
    let goals = nutrition_tracker_shared::compute_goals(&profile).map_err(|e| e.to_string())?;
    render(&goals)
}

fn aggregate_entries(entries_json: &str, goals_json: &str) -> Result<String, String> {
    let entries: Vec<FoodLogRecord> = parse("entries", entries_json)?;
    let goals: NutrientGoals = parse("goals", goals_json)?;
    let day = nutrition_tracker_shared::aggregate_day(&entries, goals).map_err(|e| e.to_string())?;
    render(&day)
}

fn profile_overview(profile_json: &str, entries_json: &str) -> Result<String, String> {
    let record: ProfileRecord = parse("profile", profile_json)?;
    let profile = UserProfile::try_from(record).map_err(|e| e.to_string())?;
    let entries: Vec<FoodLogRecord> = parse("entries", entries_json)?;
    let day = nutrition_tracker_shared::overview(&profile, &entries).map_err(|e| e.to_string())?;
    render(&day)
}

/// Compute daily calorie and macro goals for a profile
#[wasm_bindgen]
pub fn compute_goals_json(profile_json: &str) -> Result<String, JsValue> {
    goals_from_profile(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Sum a day's food log into per-meal and daily totals
#[wasm_bindgen]
pub fn aggregate_day_json(entries_json: &str, goals_json: &str) -> Result<String, JsValue> {
    aggregate_entries(entries_json, goals_json).map_err(|e| JsValue::from_str(&e))
}

/// Compute goals from a profile and sum a day's food log against them
#[wasm_bindgen]
pub fn overview_json(profile_json: &str, entries_json: &str) -> Result<String, JsValue> {
    profile_overview(profile_json, entries_json).map_err(|e| JsValue::from_str(&e))
}
