//! Personal care MCP Tools

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{CareFrequency, CareItem};
use crate::store::collection::CARE_ITEMS_KEY;
use crate::store::KeyValueStore;
use crate::wellbeing::{self, CareChecklist};

use super::{modify_collection, read_collection, DeleteResponse};

/// Response for export_care_routine
#[derive(Debug, Serialize)]
pub struct ExportCareResponse {
    pub file_name: &'static str,
    pub json: String,
    pub item_count: usize,
}

pub const CARE_EXPORT_FILE_NAME: &str = "wellup-personal-care-routine.json";

pub fn add_care_item(
    store: &dyn KeyValueStore,
    name: &str,
    frequency: &str,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> Result<CareItem, String> {
    let frequency: CareFrequency = frequency.parse().map_err(|e: crate::error::WellnessError| e.to_string())?;
    let item = modify_collection(store, CARE_ITEMS_KEY, |items: &mut Vec<CareItem>| {
        wellbeing::add_care_item(items, name, frequency, notes, now)
    })?;
    tracing::info!(id = item.id, frequency = frequency.as_str(), "care item added");
    Ok(item)
}

pub fn toggle_care_item(store: &dyn KeyValueStore, id: i64) -> Result<CareItem, String> {
    modify_collection(store, CARE_ITEMS_KEY, |items: &mut Vec<CareItem>| {
        wellbeing::toggle_care_item(items, id)
    })
}

pub fn delete_care_item(store: &dyn KeyValueStore, id: i64) -> Result<DeleteResponse, String> {
    modify_collection(store, CARE_ITEMS_KEY, |items: &mut Vec<CareItem>| {
        wellbeing::delete_care_item(items, id)
    })?;
    tracing::info!(id, "care item deleted");
    Ok(DeleteResponse::new(id))
}

pub fn list_care_items(store: &dyn KeyValueStore) -> Result<CareChecklist, String> {
    let items: Vec<CareItem> = read_collection(store, CARE_ITEMS_KEY)?;
    Ok(wellbeing::list_care_items(&items))
}

pub fn export_care_routine(store: &dyn KeyValueStore) -> Result<ExportCareResponse, String> {
    let items: Vec<CareItem> = read_collection(store, CARE_ITEMS_KEY)?;
    let json = serde_json::to_string_pretty(&items)
        .map_err(|e| format!("Failed to export care items: {}", e))?;

    Ok(ExportCareResponse {
        file_name: CARE_EXPORT_FILE_NAME,
        json,
        item_count: items.len(),
    })
}
