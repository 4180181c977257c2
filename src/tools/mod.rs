//! WellUp Tools module
//!
//! Tool implementations behind the MCP server. Each tool loads the collection
//! it needs from the key-value store, applies one operation and saves the
//! result back.

pub mod care;
pub mod events;
pub mod meals;
pub mod relief;
pub mod routines;
pub mod sleep;
pub mod status;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WellnessResult;
use crate::store::{load_collection, load_value, save_collection, KeyValueStore};

/// Response for every delete tool
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_id: i64,
}

impl DeleteResponse {
    pub fn new(deleted_id: i64) -> Self {
        Self {
            success: true,
            deleted_id,
        }
    }
}

pub(crate) fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, String> {
    load_collection(store, key).map_err(|e| format!("Failed to load {}: {}", key, e))
}

/// Load one collection, apply `op` and save it back if `op` succeeded
pub(crate) fn modify_collection<T, R, F>(
    store: &dyn KeyValueStore,
    key: &str,
    op: F,
) -> Result<R, String>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(&mut Vec<T>) -> WellnessResult<R>,
{
    let mut items: Vec<T> = read_collection(store, key)?;
    let result = op(&mut items).map_err(|e| e.to_string())?;
    save_collection(store, key, &items).map_err(|e| format!("Failed to save {}: {}", key, e))?;
    Ok(result)
}

/// Read a stored setting, falling back to `default` when unset
pub(crate) fn read_setting<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: T,
) -> Result<T, String> {
    load_value(store, key)
        .map(|value| value.unwrap_or(default))
        .map_err(|e| format!("Failed to load {}: {}", key, e))
}
