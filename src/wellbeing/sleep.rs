//! Sleep log operations and statistics

use std::cmp::Reverse;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{WellnessError, WellnessResult};
use crate::models::{
    next_id, optional_text, remove_by_id, SleepEntry, SleepLog, MAX_SLEEP_GOAL, MAX_SLEEP_HOURS,
    MIN_SLEEP_GOAL, MIN_SLEEP_HOURS,
};

pub const RECENT_LIMIT: usize = 10;

/// Headline numbers for the sleep dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepStatistics {
    pub today_hours: f64,
    pub week_average: f64,
    pub month_average: f64,
    pub goal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepStatus {
    /// At or above the goal
    Good,
    /// Within an hour of the goal
    Fair,
    Short,
}

impl SleepStatus {
    pub fn classify(hours: f64, goal: f64) -> Self {
        if hours >= goal {
            SleepStatus::Good
        } else if hours >= goal - 1.0 {
            SleepStatus::Fair
        } else {
            SleepStatus::Short
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepChartPoint {
    pub date: NaiveDate,
    /// Short label such as `Jan 5`
    pub label: String,
    pub hours: f64,
    pub status: SleepStatus,
}

/// Record a night of sleep. A second log for the same date replaces the
/// first, keeping its id and creation time.
pub fn log_sleep(
    entries: &mut Vec<SleepEntry>,
    log: SleepLog,
    now: DateTime<Utc>,
) -> WellnessResult<SleepEntry> {
    if !log.hours.is_finite() || !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&log.hours) {
        return Err(WellnessError::validation(format!(
            "Sleep hours must be between {} and {}",
            MIN_SLEEP_HOURS, MAX_SLEEP_HOURS
        )));
    }
    if !(1..=5).contains(&log.quality) {
        return Err(WellnessError::validation("Sleep quality must be between 1 and 5"));
    }

    let existing = entries.iter().position(|e| e.date == log.date);
    let (id, created_at) = match existing {
        Some(index) => (entries[index].id, entries[index].created_at),
        None => (next_id(entries, now), now),
    };

    let entry = SleepEntry {
        id,
        date: log.date,
        hours: log.hours,
        bedtime: log.bedtime,
        wake_time: log.wake_time,
        quality: log.quality,
        notes: optional_text(log.notes),
        created_at,
    };

    match existing {
        Some(index) => entries[index] = entry.clone(),
        None => entries.push(entry.clone()),
    }
    Ok(entry)
}

pub fn delete_sleep(entries: &mut Vec<SleepEntry>, id: i64) -> WellnessResult<SleepEntry> {
    remove_by_id(entries, id)
}

/// Mean hours of entries dated on or after `today - days`, to one decimal
pub fn average_hours(entries: &[SleepEntry], today: NaiveDate, days: i64) -> f64 {
    let cutoff = today - Duration::days(days);
    let recent: Vec<f64> = entries
        .iter()
        .filter(|e| e.date >= cutoff)
        .map(|e| e.hours)
        .collect();

    if recent.is_empty() {
        return 0.0;
    }
    round_one(recent.iter().sum::<f64>() / recent.len() as f64)
}

pub fn sleep_statistics(entries: &[SleepEntry], today: NaiveDate, goal: f64) -> SleepStatistics {
    SleepStatistics {
        today_hours: entries
            .iter()
            .find(|e| e.date == today)
            .map(|e| e.hours)
            .unwrap_or(0.0),
        week_average: average_hours(entries, today, 7),
        month_average: average_hours(entries, today, 30),
        goal,
    }
}

/// Newest entries first, at most `limit`
pub fn recent_sleep(entries: &[SleepEntry], limit: usize) -> Vec<SleepEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| Reverse(e.date));
    sorted.truncate(limit);
    sorted
}

/// One point per day for the last 7 or 30 days, oldest first
pub fn sleep_chart(
    entries: &[SleepEntry],
    today: NaiveDate,
    days: u32,
    goal: f64,
) -> WellnessResult<Vec<SleepChartPoint>> {
    if days != 7 && days != 30 {
        return Err(WellnessError::invalid_argument(format!(
            "chart range must be 7 or 30 days, got {}",
            days
        )));
    }

    let points = (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let hours = entries
                .iter()
                .find(|e| e.date == date)
                .map(|e| e.hours)
                .unwrap_or(0.0);
            SleepChartPoint {
                date,
                label: date.format("%b %-d").to_string(),
                hours,
                status: SleepStatus::classify(hours, goal),
            }
        })
        .collect();

    Ok(points)
}

pub fn validate_sleep_goal(hours: f64) -> WellnessResult<f64> {
    if !hours.is_finite() || !(MIN_SLEEP_GOAL..=MAX_SLEEP_GOAL).contains(&hours) {
        return Err(WellnessError::validation(format!(
            "Please set a goal between {} and {} hours",
            MIN_SLEEP_GOAL, MAX_SLEEP_GOAL
        )));
    }
    Ok(hours)
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
