//! Month grid for the calendar view
//!
//! A month is always shown as six weeks of seven days, Sunday first. Cells
//! before and after the month belong to the neighbouring months.

use std::collections::HashMap;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::Serialize;

use crate::error::{WellnessError, WellnessResult};
use crate::models::{clock, CalendarEvent};

/// Number of cells in every month grid (6 weeks x 7 days)
pub const GRID_CELLS: usize = 42;

/// One day of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGridCell {
    pub day_number: u32,
    pub iso_date: String,
    pub belongs_to_displayed_month: bool,
    pub is_today: bool,
    pub has_event: bool,
}

/// Events grouped by date for constant-time lookups
#[derive(Debug)]
pub struct EventIndex<'a> {
    events: &'a [CalendarEvent],
    by_date: HashMap<NaiveDate, Vec<usize>>,
}

impl<'a> EventIndex<'a> {
    pub fn new(events: &'a [CalendarEvent]) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();
        for (position, event) in events.iter().enumerate() {
            by_date.entry(event.date).or_default().push(position);
        }
        Self { events, by_date }
    }

    pub fn has_event(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    /// Events on `date` in chronological order
    pub fn events_on(&self, date: NaiveDate) -> Vec<&'a CalendarEvent> {
        let mut found: Vec<&CalendarEvent> = self
            .by_date
            .get(&date)
            .map(|positions| positions.iter().map(|&p| &self.events[p]).collect())
            .unwrap_or_default();
        found.sort_by_key(|event| event.start_key());
        found
    }

    /// Number of distinct dates carrying at least one event
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }
}

/// First day of a 1-based month
pub(crate) fn first_of_month(year: i32, month: u32) -> WellnessResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(WellnessError::invalid_argument(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| WellnessError::invalid_argument(format!("year {} is out of range", year)))
}

/// Build the grid for a 1-based month, marking today's date from the local clock
pub fn build_month_grid(
    year: i32,
    month: u32,
    events: &[CalendarEvent],
) -> WellnessResult<Vec<CalendarGridCell>> {
    build_month_grid_at(year, month, events, Local::now().date_naive())
}

/// Build the grid for a 1-based month with an explicit current date
pub fn build_month_grid_at(
    year: i32,
    month: u32,
    events: &[CalendarEvent],
    today: NaiveDate,
) -> WellnessResult<Vec<CalendarGridCell>> {
    let first = first_of_month(year, month)?;
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_days(Days::new(leading))
        .filter(|start| start.checked_add_days(Days::new(GRID_CELLS as u64 - 1)).is_some())
        .ok_or_else(|| {
            WellnessError::invalid_argument(format!("{}-{:02} cannot be shown as a full grid", year, month))
        })?;
    let index = EventIndex::new(events);

    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let in_month = date.year() == year && date.month() == month;
            CalendarGridCell {
                day_number: date.day(),
                iso_date: clock::iso_date(date),
                belongs_to_displayed_month: in_month,
                is_today: in_month && date == today,
                has_event: index.has_event(date),
            }
        })
        .collect();

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventCategory, Priority};
    use crate::calendar::MonthCursor;
    use chrono::{Duration, TimeZone, Utc};

    fn event(id: i64, date: &str) -> CalendarEvent {
        CalendarEvent {
            id,
            title: format!("event {}", id),
            date: clock::parse_date(date).unwrap(),
            time: None,
            description: None,
            category: EventCategory::Other,
            priority: Priority::Medium,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        clock::parse_date(s).unwrap()
    }

    #[test]
    fn test_every_month_has_42_cells() {
        let today = date("2024-01-15");
        for year in [1999, 2020, 2021, 2024] {
            for month in 1..=12 {
                let grid = build_month_grid_at(year, month, &[], today).unwrap();
                assert_eq!(grid.len(), GRID_CELLS);
            }
        }
    }

    #[test]
    fn test_iso_dates_are_consecutive() {
        let grid = build_month_grid_at(2024, 3, &[], date("2024-03-01")).unwrap();
        for pair in grid.windows(2) {
            let a = date(&pair[0].iso_date);
            let b = date(&pair[1].iso_date);
            assert_eq!(b - a, Duration::days(1));
        }
    }

    #[test]
    fn test_january_2024_rolls_back_into_december() {
        // 2024-01-01 is a Monday
        let grid = build_month_grid_at(2024, 1, &[], date("2024-01-10")).unwrap();
        assert_eq!(grid[0].iso_date, "2023-12-31");
        assert_eq!(grid[0].day_number, 31);
        assert!(!grid[0].belongs_to_displayed_month);
        assert_eq!(grid[1].iso_date, "2024-01-01");
        assert!(grid[1].belongs_to_displayed_month);
        assert_eq!(grid[41].iso_date, "2024-02-10");
    }

    #[test]
    fn test_sunday_start_has_no_leading_cells() {
        // 2015-02-01 is a Sunday
        let feb_2015 = build_month_grid_at(2015, 2, &[], date("2015-02-01")).unwrap();
        assert_eq!(feb_2015[0].iso_date, "2015-02-01");
        assert_eq!(feb_2015[0].day_number, 1);
        let in_month = feb_2015.iter().filter(|c| c.belongs_to_displayed_month).count();
        assert_eq!(in_month, 28);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let grid = build_month_grid_at(2023, 12, &[], date("2023-06-01")).unwrap();
        let last = grid.last().unwrap();
        assert!(last.iso_date.starts_with("2024-01-"));
        assert!(!last.belongs_to_displayed_month);
    }

    #[test]
    fn test_today_flag_only_in_displayed_month() {
        let today = date("2024-03-31");
        let march = build_month_grid_at(2024, 3, &[], today).unwrap();
        assert_eq!(march.iter().filter(|c| c.is_today).count(), 1);

        // 2024-03-31 also appears as a leading cell of April
        let april = build_month_grid_at(2024, 4, &[], today).unwrap();
        assert!(april.iter().any(|c| c.iso_date == "2024-03-31"));
        assert_eq!(april.iter().filter(|c| c.is_today).count(), 0);
    }

    #[test]
    fn test_has_event_on_adjacent_month_cells() {
        let events = vec![event(1, "2024-01-05"), event(2, "2023-12-31")];
        let grid = build_month_grid_at(2024, 1, &events, date("2024-01-01")).unwrap();
        assert!(grid[0].has_event);
        let fifth = grid.iter().find(|c| c.iso_date == "2024-01-05").unwrap();
        assert!(fifth.has_event);
        assert_eq!(grid.iter().filter(|c| c.has_event).count(), 2);
    }

    #[test]
    fn test_invalid_month_rejected() {
        let today = date("2024-01-01");
        assert!(matches!(
            build_month_grid_at(2024, 0, &[], today),
            Err(WellnessError::InvalidArgument(_))
        ));
        assert!(build_month_grid_at(2024, 13, &[], today).is_err());
    }

    #[test]
    fn test_grid_at_date_limits() {
        let today = date("2024-01-01");
        let last = build_month_grid_at(NaiveDate::MAX.year(), 12, &[], today);
        assert!(matches!(last, Err(WellnessError::InvalidArgument(_))));
        let first = build_month_grid_at(NaiveDate::MIN.year(), 1, &[], today);
        assert!(matches!(first, Err(WellnessError::InvalidArgument(_))));

        // A year away from the limits still gets all 42 cells
        let near_max = build_month_grid_at(NaiveDate::MAX.year() - 1, 12, &[], today).unwrap();
        assert_eq!(near_max.len(), GRID_CELLS);
    }

    #[test]
    fn test_local_clock_marks_current_month_only() {
        let today = Local::now().date_naive();
        let cursor = MonthCursor::today(today);
        let current = build_month_grid(cursor.year(), cursor.month(), &[]).unwrap();
        assert_eq!(current.iter().filter(|c| c.is_today).count(), 1);

        let next = cursor.next();
        let following = build_month_grid(next.year(), next.month(), &[]).unwrap();
        assert_eq!(following.iter().filter(|c| c.is_today).count(), 0);
    }

    #[test]
    fn test_cell_serializes_camel_case() {
        let grid = build_month_grid_at(2024, 1, &[], date("2024-01-01")).unwrap();
        let value = serde_json::to_value(&grid[1]).unwrap();
        assert_eq!(value["isoDate"], "2024-01-01");
        assert_eq!(value["belongsToDisplayedMonth"], true);
        assert_eq!(value["isToday"], true);
    }

    #[test]
    fn test_index_lookup() {
        let events = vec![event(1, "2024-01-05"), event(2, "2024-01-05"), event(3, "2024-01-06")];
        let index = EventIndex::new(&events);
        assert_eq!(index.date_count(), 2);
        assert_eq!(index.events_on(date("2024-01-05")).len(), 2);
        assert!(!index.has_event(date("2024-01-07")));
    }
}
