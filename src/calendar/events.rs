//! Event collection operations

use chrono::{DateTime, Utc};

use crate::error::WellnessResult;
use crate::models::{
    clock, next_id, optional_text, position, remove_by_id, required_text, CalendarEvent,
    EventCategory, EventDraft, Filter, Priority,
};

/// Insert a new event or replace an existing one.
///
/// A draft whose id matches an event replaces it in place, keeping the
/// original `created_at`. Any other draft is appended under a fresh id. The
/// collection is untouched when validation fails.
pub fn upsert_event(
    events: &mut Vec<CalendarEvent>,
    draft: EventDraft,
    now: DateTime<Utc>,
) -> WellnessResult<CalendarEvent> {
    let title = required_text(&draft.title, "Title")?;
    let date = clock::parse_date(&required_text(&draft.date, "Date")?)?;
    let category: EventCategory = required_text(&draft.category, "Category")?.parse()?;
    let priority: Priority = required_text(&draft.priority, "Priority")?.parse()?;
    let time = clock::parse_optional_time(draft.time.as_deref())?;
    let description = optional_text(draft.description);

    let existing = draft.id.and_then(|id| position(events, id).ok());

    match existing {
        Some(index) => {
            let event = &mut events[index];
            event.title = title;
            event.date = date;
            event.time = time;
            event.description = description;
            event.category = category;
            event.priority = priority;
            Ok(event.clone())
        }
        None => {
            let event = CalendarEvent {
                id: next_id(events, now),
                title,
                date,
                time,
                description,
                category,
                priority,
                created_at: now,
            };
            events.push(event.clone());
            Ok(event)
        }
    }
}

/// Events ordered by date then time; untimed events lead their day and ties
/// keep insertion order
pub fn list_events_chronological(events: &[CalendarEvent]) -> Vec<CalendarEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(CalendarEvent::start_key);
    sorted
}

pub fn delete_event(events: &mut Vec<CalendarEvent>, id: i64) -> WellnessResult<CalendarEvent> {
    remove_by_id(events, id)
}

/// Chronological events matching a category filter
pub fn filter_by_category(
    events: &[CalendarEvent],
    filter: Filter<EventCategory>,
) -> Vec<CalendarEvent> {
    let mut matching: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| filter.matches(&event.category))
        .cloned()
        .collect();
    matching.sort_by_key(CalendarEvent::start_key);
    matching
}

/// Pretty-printed JSON array of the collection, in stored order
pub fn export_events(events: &[CalendarEvent]) -> WellnessResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WellnessError;
    use chrono::{Duration, NaiveTime, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn draft(title: &str, date: &str, time: Option<&str>) -> EventDraft {
        EventDraft {
            id: None,
            title: title.to_string(),
            date: date.to_string(),
            time: time.map(str::to_string),
            description: None,
            category: "exercise".to_string(),
            priority: "medium".to_string(),
        }
    }

    #[test]
    fn test_upsert_into_empty_collection() {
        let mut events = Vec::new();
        let created = upsert_event(&mut events, draft("Run", "2024-01-02", None), now()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(created.id, now().timestamp_millis());
        assert_eq!(created.created_at, now());
    }

    #[test]
    fn test_upsert_same_id_replaces() {
        let mut events = Vec::new();
        let created = upsert_event(&mut events, draft("Run", "2024-01-02", None), now()).unwrap();

        let mut edit = draft("Long run", "2024-01-03", Some("06:30"));
        edit.id = Some(created.id);
        edit.priority = "high".to_string();
        let later = now() + Duration::hours(5);
        upsert_event(&mut events, edit.clone(), later).unwrap();
        let updated = upsert_event(&mut events, edit, later).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Long run");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.time, NaiveTime::from_hms_opt(6, 30, 0));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn test_upsert_unknown_id_appends_with_fresh_id() {
        let mut events = Vec::new();
        let first = upsert_event(&mut events, draft("A", "2024-01-02", None), now()).unwrap();
        let mut stray = draft("B", "2024-01-02", None);
        stray.id = Some(first.id + 1_000);
        let second = upsert_event(&mut events, stray, now()).unwrap();
        assert_eq!(events.len(), 2);
        assert_ne!(second.id, first.id);
        assert_ne!(second.id, first.id + 1_000);
    }

    #[test]
    fn test_upsert_missing_fields_leaves_collection() {
        let mut events = Vec::new();
        upsert_event(&mut events, draft("Run", "2024-01-02", None), now()).unwrap();
        let before = events.clone();

        let mut no_priority = draft("Swim", "2024-01-03", None);
        no_priority.priority = "  ".to_string();
        let err = upsert_event(&mut events, no_priority, now()).unwrap_err();
        assert!(matches!(err, WellnessError::Validation(_)));

        let err = upsert_event(&mut events, draft("", "2024-01-03", None), now()).unwrap_err();
        assert_eq!(err.to_string(), "Title is required");

        assert!(upsert_event(&mut events, draft("Swim", "", None), now()).is_err());
        assert_eq!(events, before);
    }

    #[test]
    fn test_chronological_order() {
        let mut events = Vec::new();
        for date in ["2024-01-03", "2024-01-01", "2024-01-02"] {
            upsert_event(&mut events, draft(date, date, None), now()).unwrap();
        }
        let titles: Vec<String> = list_events_chronological(&events)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_chronological_sort_is_stable() {
        let mut events = Vec::new();
        upsert_event(&mut events, draft("late", "2024-01-01", Some("18:00")), now()).unwrap();
        upsert_event(&mut events, draft("first", "2024-01-01", Some("09:00")), now()).unwrap();
        upsert_event(&mut events, draft("second", "2024-01-01", Some("09:00")), now()).unwrap();
        upsert_event(&mut events, draft("untimed", "2024-01-01", None), now()).unwrap();

        let titles: Vec<String> = list_events_chronological(&events)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["untimed", "first", "second", "late"]);
    }

    #[test]
    fn test_delete_missing_event() {
        let mut events = Vec::new();
        let created = upsert_event(&mut events, draft("Run", "2024-01-02", None), now()).unwrap();
        let err = delete_event(&mut events, created.id + 1).unwrap_err();
        assert!(matches!(err, WellnessError::NotFound { kind: "Event", .. }));
        assert_eq!(events.len(), 1);

        delete_event(&mut events, created.id).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let mut events = Vec::new();
        upsert_event(&mut events, draft("Run", "2024-01-02", None), now()).unwrap();
        let mut dinner = draft("Dinner", "2024-01-01", None);
        dinner.category = "social".to_string();
        upsert_event(&mut events, dinner, now()).unwrap();

        assert_eq!(filter_by_category(&events, Filter::All).len(), 2);
        let social = filter_by_category(&events, Filter::Only(EventCategory::Social));
        assert_eq!(social.len(), 1);
        assert_eq!(social[0].title, "Dinner");
    }

    #[test]
    fn test_export_is_json_array() {
        let mut events = Vec::new();
        upsert_event(&mut events, draft("Run", "2024-01-02", Some("07:00")), now()).unwrap();
        let json = export_events(&events).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Run");
        assert_eq!(value[0]["time"], "07:00");
        assert_eq!(value[0]["category"], "exercise");
        assert!(json.contains('\n'));
    }
}
