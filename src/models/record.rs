//! Identity and lookup shared by every persisted collection

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{WellnessError, WellnessResult};

/// A persisted record with a collection-unique id
pub trait Record {
    /// Human-readable kind used in not-found messages
    const KIND: &'static str;

    fn id(&self) -> i64;
}

/// Generate an id for a new record.
///
/// Ids are millisecond timestamps, bumped past the current maximum so two
/// records created within the same millisecond never collide.
pub fn next_id<T: Record>(items: &[T], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    match items.iter().map(Record::id).max() {
        Some(max) if max >= candidate => max + 1,
        _ => candidate,
    }
}

pub fn position<T: Record>(items: &[T], id: i64) -> WellnessResult<usize> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| WellnessError::not_found(T::KIND, id))
}

pub fn find_mut<T: Record>(items: &mut [T], id: i64) -> WellnessResult<&mut T> {
    items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| WellnessError::not_found(T::KIND, id))
}

/// Remove the record with `id`, leaving the collection untouched if absent
pub fn remove_by_id<T: Record>(items: &mut Vec<T>, id: i64) -> WellnessResult<T> {
    let index = position(items, id)?;
    Ok(items.remove(index))
}

/// Trim free text, mapping blank input to `None`
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trim a required text field, failing with a validation error when blank
pub fn required_text(value: &str, field: &str) -> WellnessResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WellnessError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// A list filter: everything, or only one enum value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Filter<T>
where
    T: FromStr<Err = WellnessError>,
{
    /// `"all"` (or blank) selects everything, anything else must name a value
    pub fn parse(value: Option<&str>) -> WellnessResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Filter::All),
            Some(s) if s.eq_ignore_ascii_case("all") => Ok(Filter::All),
            Some(s) => s.parse().map(Filter::Only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug)]
    struct Item(i64);

    impl Record for Item {
        const KIND: &'static str = "Item";
        fn id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_next_id_uses_timestamp_when_free() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(next_id::<Item>(&[], now), 1_700_000_000_000);
        assert_eq!(next_id(&[Item(5)], now), 1_700_000_000_000);
    }

    #[test]
    fn test_next_id_never_collides() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let items = vec![Item(1_000), Item(1_001)];
        assert_eq!(next_id(&items, now), 1_002);
    }

    #[test]
    fn test_remove_missing_leaves_collection() {
        let mut items = vec![Item(1), Item(2)];
        let err = remove_by_id(&mut items, 9).unwrap_err();
        assert!(matches!(err, WellnessError::NotFound { kind: "Item", id: 9 }));
        assert_eq!(items.len(), 2);

        let removed = remove_by_id(&mut items, 1).unwrap();
        assert_eq!(removed.0, 1);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" hi ".into())), Some("hi".into()));
        assert!(required_text("   ", "Title").is_err());
        assert_eq!(required_text(" Run ", "Name").unwrap(), "Run");
    }
}
