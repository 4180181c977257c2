//! Daily water intake, tracked as eight numbered glasses per day

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{WellnessError, WellnessResult};
use crate::models::WaterGlass;

pub const WATER_GOAL: u8 = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterStatus {
    pub date: NaiveDate,
    pub count: usize,
    pub goal: u8,
    /// Glass numbers filled on this date, ascending
    pub filled: Vec<u8>,
    pub goal_reached: bool,
}

fn check_glass(glass: u8) -> WellnessResult<u8> {
    if glass == 0 || glass > WATER_GOAL {
        return Err(WellnessError::validation(format!(
            "Glass number must be between 1 and {}",
            WATER_GOAL
        )));
    }
    Ok(glass)
}

/// Fill or empty one glass; returns whether it is now filled
pub fn toggle_glass(
    water: &mut Vec<WaterGlass>,
    date: NaiveDate,
    glass: u8,
    now: DateTime<Utc>,
) -> WellnessResult<bool> {
    let glass = check_glass(glass)?;

    if let Some(index) = water.iter().position(|w| w.date == date && w.glass == glass) {
        water.remove(index);
        return Ok(false);
    }

    water.push(WaterGlass {
        glass,
        date,
        timestamp: now,
    });
    Ok(true)
}

/// Fill the lowest-numbered empty glass of the day
pub fn add_glass(water: &mut Vec<WaterGlass>, date: NaiveDate, now: DateTime<Utc>) -> WellnessResult<u8> {
    let next = (1..=WATER_GOAL)
        .find(|n| !water.iter().any(|w| w.date == date && w.glass == *n))
        .ok_or_else(|| WellnessError::validation("All glasses are already filled"))?;

    toggle_glass(water, date, next, now)?;
    Ok(next)
}

/// Empty every glass of the day; returns how many were removed
pub fn reset_water(water: &mut Vec<WaterGlass>, date: NaiveDate) -> usize {
    let before = water.len();
    water.retain(|w| w.date != date);
    before - water.len()
}

pub fn water_status(water: &[WaterGlass], date: NaiveDate) -> WaterStatus {
    let mut filled: Vec<u8> = water
        .iter()
        .filter(|w| w.date == date)
        .map(|w| w.glass)
        .collect();
    filled.sort_unstable();
    filled.dedup();

    WaterStatus {
        date,
        count: filled.len(),
        goal: WATER_GOAL,
        goal_reached: filled.len() >= usize::from(WATER_GOAL),
        filled,
    }
}
