//! Sleep MCP Tools

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{SleepEntry, SleepLog, DEFAULT_SLEEP_GOAL};
use crate::store::collection::{SLEEP_ENTRIES_KEY, SLEEP_GOAL_KEY};
use crate::store::{save_value, KeyValueStore};
use crate::wellbeing::{self, SleepChartPoint, SleepStatistics, RECENT_LIMIT};

use super::{modify_collection, read_collection, read_setting, DeleteResponse};

/// Response for log_sleep
#[derive(Debug, Serialize)]
pub struct LogSleepResponse {
    pub entry: SleepEntry,
    pub quality_label: &'static str,
    pub replaced_existing: bool,
}

/// Response for get_sleep_overview
#[derive(Debug, Serialize)]
pub struct SleepOverview {
    pub statistics: SleepStatistics,
    pub recent: Vec<SleepEntry>,
    pub chart: Vec<SleepChartPoint>,
}

/// Response for set_sleep_goal
#[derive(Debug, Serialize)]
pub struct SleepGoalResponse {
    pub success: bool,
    pub goal_hours: f64,
}

fn sleep_goal(store: &dyn KeyValueStore) -> Result<f64, String> {
    read_setting(store, SLEEP_GOAL_KEY, DEFAULT_SLEEP_GOAL)
}

pub fn log_sleep(
    store: &dyn KeyValueStore,
    log: SleepLog,
    now: DateTime<Utc>,
) -> Result<LogSleepResponse, String> {
    let date = log.date;
    let (entry, replaced_existing) =
        modify_collection(store, SLEEP_ENTRIES_KEY, |entries: &mut Vec<SleepEntry>| {
            let existed = entries.iter().any(|e| e.date == date);
            let entry = wellbeing::log_sleep(entries, log, now)?;
            Ok((entry, existed))
        })?;

    tracing::info!(id = entry.id, %date, hours = entry.hours, replaced_existing, "sleep logged");

    Ok(LogSleepResponse {
        quality_label: entry.quality_label(),
        entry,
        replaced_existing,
    })
}

pub fn delete_sleep(store: &dyn KeyValueStore, id: i64) -> Result<DeleteResponse, String> {
    modify_collection(store, SLEEP_ENTRIES_KEY, |entries: &mut Vec<SleepEntry>| {
        wellbeing::delete_sleep(entries, id)
    })?;
    tracing::info!(id, "sleep entry deleted");
    Ok(DeleteResponse::new(id))
}

/// Statistics, the ten most recent nights and a 7 or 30 day chart
pub fn get_sleep_overview(
    store: &dyn KeyValueStore,
    today: NaiveDate,
    chart_days: u32,
) -> Result<SleepOverview, String> {
    let entries: Vec<SleepEntry> = read_collection(store, SLEEP_ENTRIES_KEY)?;
    let goal = sleep_goal(store)?;

    Ok(SleepOverview {
        statistics: wellbeing::sleep_statistics(&entries, today, goal),
        recent: wellbeing::recent_sleep(&entries, RECENT_LIMIT),
        chart: wellbeing::sleep_chart(&entries, today, chart_days, goal).map_err(|e| e.to_string())?,
    })
}

pub fn set_sleep_goal(store: &dyn KeyValueStore, hours: f64) -> Result<SleepGoalResponse, String> {
    let hours = wellbeing::validate_sleep_goal(hours).map_err(|e| e.to_string())?;
    save_value(store, SLEEP_GOAL_KEY, &hours).map_err(|e| format!("Failed to save sleep goal: {}", e))?;
    tracing::info!(hours, "sleep goal updated");

    Ok(SleepGoalResponse {
        success: true,
        goal_hours: hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 7, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn log(hours: f64) -> SleepLog {
        SleepLog {
            date: today(),
            hours,
            bedtime: None,
            wake_time: None,
            quality: 4,
            notes: Some("slept well".to_string()),
        }
    }

    #[test]
    fn test_log_replaces_same_night() {
        let store = MemoryStore::new();
        let first = log_sleep(&store, log(6.0), now()).unwrap();
        assert!(!first.replaced_existing);
        let second = log_sleep(&store, log(7.5), now()).unwrap();
        assert!(second.replaced_existing);
        assert_eq!(second.entry.id, first.entry.id);
        assert_eq!(second.quality_label, "Good");

        let overview = get_sleep_overview(&store, today(), 7).unwrap();
        assert_eq!(overview.recent.len(), 1);
        assert_eq!(overview.statistics.today_hours, 7.5);
        assert_eq!(overview.chart.len(), 7);
    }

    #[test]
    fn test_rejects_impossible_night() {
        let store = MemoryStore::new();
        let err = log_sleep(&store, log(25.0), now()).unwrap_err();
        assert_eq!(err, "Sleep hours must be between 0 and 24");
    }

    #[test]
    fn test_goal_used_by_overview() {
        let store = MemoryStore::new();
        assert!(set_sleep_goal(&store, 13.0).is_err());
        set_sleep_goal(&store, 7.0).unwrap();
        log_sleep(&store, log(7.0), now()).unwrap();
        let overview = get_sleep_overview(&store, today(), 30).unwrap();
        assert_eq!(overview.statistics.goal, 7.0);
        assert_eq!(overview.chart.len(), 30);
        assert!(get_sleep_overview(&store, today(), 10).is_err());
    }

    #[test]
    fn test_delete_sleep() {
        let store = MemoryStore::new();
        let logged = log_sleep(&store, log(8.0), now()).unwrap();
        delete_sleep(&store, logged.entry.id).unwrap();
        assert!(delete_sleep(&store, logged.entry.id).is_err());
    }
}
