//! Personal care checklist

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::WellnessResult;
use crate::models::{
    find_mut, next_id, optional_text, remove_by_id, required_text, CareFrequency, CareItem,
};

#[derive(Debug, Clone, Serialize)]
pub struct CareChecklist {
    pub items: Vec<CareItem>,
    pub total: usize,
    pub completed: usize,
}

pub fn add_care_item(
    items: &mut Vec<CareItem>,
    name: &str,
    frequency: CareFrequency,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> WellnessResult<CareItem> {
    let item = CareItem {
        id: next_id(items, now),
        name: required_text(name, "Name")?,
        frequency,
        notes: optional_text(notes),
        completed: false,
        created_at: now,
    };
    items.push(item.clone());
    Ok(item)
}

pub fn toggle_care_item(items: &mut [CareItem], id: i64) -> WellnessResult<CareItem> {
    let item = find_mut(items, id)?;
    item.completed = !item.completed;
    Ok(item.clone())
}

pub fn delete_care_item(items: &mut Vec<CareItem>, id: i64) -> WellnessResult<CareItem> {
    remove_by_id(items, id)
}

pub fn list_care_items(items: &[CareItem]) -> CareChecklist {
    CareChecklist {
        items: items.to_vec(),
        total: items.len(),
        completed: items.iter().filter(|i| i.completed).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 21, 0, 0).unwrap()
    }

    #[test]
    fn test_add_toggle_count() {
        let mut items = Vec::new();
        let floss = add_care_item(&mut items, " Floss ", CareFrequency::Daily, None, now()).unwrap();
        add_care_item(&mut items, "Haircut", CareFrequency::Monthly, Some("Book ahead".into()), now()).unwrap();
        assert_eq!(floss.name, "Floss");

        toggle_care_item(&mut items, floss.id).unwrap();
        let checklist = list_care_items(&items);
        assert_eq!(checklist.total, 2);
        assert_eq!(checklist.completed, 1);

        assert!(!toggle_care_item(&mut items, floss.id).unwrap().completed);
    }

    #[test]
    fn test_blank_name_and_missing_ids() {
        let mut items = Vec::new();
        assert!(add_care_item(&mut items, "", CareFrequency::Weekly, None, now()).is_err());
        assert!(toggle_care_item(&mut items, 7).is_err());
        assert!(delete_care_item(&mut items, 7).is_err());
    }

    #[test]
    fn test_as_needed_serializes_kebab_case() {
        let mut items = Vec::new();
        let item = add_care_item(&mut items, "Nail trim", CareFrequency::AsNeeded, None, now()).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["frequency"], "as-needed");
        assert_eq!(value["completed"], false);
    }
}
