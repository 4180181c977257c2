//! Calendar MCP Tools
//!
//! Month grids and event management.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::calendar::{self, CalendarGridCell, EventIndex, MonthCursor};
use crate::models::{CalendarEvent, EventCategory, EventDraft, Filter};
use crate::store::collection::EVENTS_KEY;
use crate::store::KeyValueStore;

use super::{modify_collection, read_collection, DeleteResponse};

/// Response for get_month_grid
#[derive(Debug, Serialize)]
pub struct MonthGridResponse {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub previous: MonthCursor,
    pub next: MonthCursor,
    pub cells: Vec<CalendarGridCell>,
    pub event_count: usize,
}

/// Response for save_event
#[derive(Debug, Serialize)]
pub struct SaveEventResponse {
    pub event: CalendarEvent,
    pub created: bool,
}

/// Response for list_events
#[derive(Debug, Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<CalendarEvent>,
    pub total: usize,
}

/// Response for export_events
#[derive(Debug, Serialize)]
pub struct ExportEventsResponse {
    pub file_name: &'static str,
    pub json: String,
    pub event_count: usize,
}

pub const EXPORT_FILE_NAME: &str = "wellup-schedule.json";

/// Grid for a 1-based month; `today` marks the current day
pub fn get_month_grid(
    store: &dyn KeyValueStore,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<MonthGridResponse, String> {
    let cursor = MonthCursor::new(year, month).map_err(|e| e.to_string())?;
    let events: Vec<CalendarEvent> = read_collection(store, EVENTS_KEY)?;
    let cells = calendar::build_month_grid_at(year, month, &events, today).map_err(|e| e.to_string())?;

    let event_count = events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .count();

    Ok(MonthGridResponse {
        year,
        month,
        label: cursor.label(),
        previous: cursor.previous(),
        next: cursor.next(),
        cells,
        event_count,
    })
}

/// Create an event, or edit one when the draft carries a known id
pub fn save_event(
    store: &dyn KeyValueStore,
    draft: EventDraft,
    now: DateTime<Utc>,
) -> Result<SaveEventResponse, String> {
    let requested_id = draft.id;
    let (event, created) = modify_collection(store, EVENTS_KEY, |events: &mut Vec<CalendarEvent>| {
        let existed = requested_id.is_some_and(|id| events.iter().any(|e| e.id == id));
        let event = calendar::upsert_event(events, draft, now)?;
        Ok((event, !existed))
    })?;

    if created {
        tracing::info!(id = event.id, date = %event.date, "event created");
    } else {
        tracing::info!(id = event.id, "event updated");
    }

    Ok(SaveEventResponse { event, created })
}

pub fn delete_event(store: &dyn KeyValueStore, id: i64) -> Result<DeleteResponse, String> {
    modify_collection(store, EVENTS_KEY, |events: &mut Vec<CalendarEvent>| {
        calendar::delete_event(events, id)
    })?;
    tracing::info!(id, "event deleted");
    Ok(DeleteResponse::new(id))
}

/// Events in chronological order, optionally limited to one category
pub fn list_events(store: &dyn KeyValueStore, category: Option<&str>) -> Result<ListEventsResponse, String> {
    let filter: Filter<EventCategory> = Filter::parse(category).map_err(|e| e.to_string())?;
    let events: Vec<CalendarEvent> = read_collection(store, EVENTS_KEY)?;
    let events = calendar::filter_by_category(&events, filter);

    Ok(ListEventsResponse {
        total: events.len(),
        events,
    })
}

/// Events on one date, in time order
pub fn events_on_date(store: &dyn KeyValueStore, date: NaiveDate) -> Result<ListEventsResponse, String> {
    let events: Vec<CalendarEvent> = read_collection(store, EVENTS_KEY)?;
    let on_date: Vec<CalendarEvent> = EventIndex::new(&events)
        .events_on(date)
        .into_iter()
        .cloned()
        .collect();

    Ok(ListEventsResponse {
        total: on_date.len(),
        events: on_date,
    })
}

pub fn export_events(store: &dyn KeyValueStore) -> Result<ExportEventsResponse, String> {
    let events: Vec<CalendarEvent> = read_collection(store, EVENTS_KEY)?;
    let json = calendar::export_events(&events).map_err(|e| format!("Failed to export events: {}", e))?;

    Ok(ExportEventsResponse {
        file_name: EXPORT_FILE_NAME,
        json,
        event_count: events.len(),
    })
}
