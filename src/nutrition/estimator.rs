//! Keyword-based calorie estimator
//!
//! Every keyword found in the description adds its portion value, so
//! "chicken with rice" counts both. Preparation words then scale or pad the
//! total, and the result is rounded half-up to the nearest 10 kcal.

use serde::Serialize;

use crate::error::WellnessResult;
use crate::models::Portion;

use super::calorie_table::FoodCalorieTable;

const FRIED_FACTOR: f64 = 1.3;
const LEAN_FACTOR: f64 = 0.9;
const ADDED_FAT_KCAL: f64 = 100.0;
const DRESSING_KCAL: f64 = 150.0;

/// An estimate together with the rules that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieEstimate {
    pub calories: u32,
    pub portion: Portion,
    pub matched_keywords: Vec<String>,
    pub used_fallback: bool,
    pub fried: bool,
    pub grilled_or_steamed: bool,
    pub added_fat: bool,
    pub salad_dressing: bool,
}

/// Estimate calories for a free-text food description using the built-in table
pub fn estimate(food_text: &str, portion: Portion) -> u32 {
    explain(FoodCalorieTable::standard(), food_text, portion).calories
}

/// Same as [`estimate`], with the portion given as text
pub fn estimate_str(food_text: &str, portion: &str) -> WellnessResult<u32> {
    let portion: Portion = portion.parse()?;
    Ok(estimate(food_text, portion))
}

/// Estimate against an explicit table, reporting which rules applied
pub fn explain(table: &FoodCalorieTable, food_text: &str, portion: Portion) -> CalorieEstimate {
    let text = food_text.to_lowercase();

    let mut total = 0.0;
    let mut matched_keywords = Vec::new();
    for (keyword, calories) in table.iter() {
        if text.contains(keyword) {
            total += f64::from(calories.for_portion(portion));
            matched_keywords.push(keyword.to_string());
        }
    }

    let used_fallback = matched_keywords.is_empty();
    if used_fallback {
        total = f64::from(table.fallback().for_portion(portion));
    }

    // "deep fried" contains "fried"
    let fried = text.contains("fried");
    if fried {
        total *= FRIED_FACTOR;
    }

    let grilled_or_steamed = text.contains("grilled") || text.contains("steamed");
    if grilled_or_steamed {
        total *= LEAN_FACTOR;
    }

    let added_fat = text.contains("oil") || text.contains("butter");
    if added_fat {
        total += ADDED_FAT_KCAL;
    }

    let salad_dressing = text.contains("salad") && text.contains("dressing");
    if salad_dressing {
        total += DRESSING_KCAL;
    }

    CalorieEstimate {
        calories: round_to_ten(total),
        portion,
        matched_keywords,
        used_fallback,
        fried,
        grilled_or_steamed,
        added_fat,
        salad_dressing,
    }
}

/// Round half-up to a multiple of 10
fn round_to_ten(value: f64) -> u32 {
    let rounded = (value / 10.0 + 0.5).floor() * 10.0;
    if rounded <= 0.0 {
        0
    } else {
        rounded as u32
    }
}
