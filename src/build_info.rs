//! Build information module
//!
//! Compile-time metadata for this build of WellUp, and the wellness areas it
//! serves. Shown in the startup banner and by the `wellup_status` tool.

use serde::Serialize;

use crate::store::collection::{
    CARE_ITEMS_KEY, EVENTS_KEY, EXERCISE_ROUTINES_KEY, MEALS_KEY, RELIEF_ACTIVITIES_KEY,
    SLEEP_ENTRIES_KEY, WATER_KEY,
};
use crate::store::migrations::SCHEMA_VERSION;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Stamped by build.rs; 0 when built without it
pub const BUILD_NUMBER: u64 = build_number(option_env!("WELLUP_BUILD_NUMBER"));

pub const BUILD_TIMESTAMP: &str = match option_env!("WELLUP_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// A wellness area and the collection it keeps
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Area {
    pub name: &'static str,
    pub collection: &'static str,
}

pub const AREAS: [Area; 7] = [
    Area { name: "Nutrition", collection: MEALS_KEY },
    Area { name: "Water", collection: WATER_KEY },
    Area { name: "Calendar", collection: EVENTS_KEY },
    Area { name: "Sleep", collection: SLEEP_ENTRIES_KEY },
    Area { name: "Exercise", collection: EXERCISE_ROUTINES_KEY },
    Area { name: "Personal care", collection: CARE_ITEMS_KEY },
    Area { name: "Stress relief", collection: RELIEF_ACTIVITIES_KEY },
];

/// Decimal digits only; anything else (or overflow) counts as unstamped
const fn build_number(raw: Option<&str>) -> u64 {
    let bytes = match raw {
        Some(s) => s.as_bytes(),
        None => return 0,
    };
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i].wrapping_sub(b'0');
        if digit > 9 {
            return 0;
        }
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add(digit as u64) {
                Some(v) => v,
                None => return 0,
            },
            None => return 0,
        };
        i += 1;
    }
    value
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub schema_version: i32,
    pub areas: &'static [Area],
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            schema_version: SCHEMA_VERSION,
            areas: &AREAS,
        }
    }
}

/// Print the startup banner to stderr (stdout belongs to the MCP transport)
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    let areas: Vec<&str> = info.areas.iter().map(|a| a.name).collect();
    eprintln!("WellUp Wellness Manager v{} (build {}, {})", info.version, info.build_number, info.build_timestamp);
    eprintln!("  Schema v{} | Tracking: {}", info.schema_version, areas.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_number_parsing() {
        assert_eq!(build_number(Some("42")), 42);
        assert_eq!(build_number(Some("0")), 0);
        assert_eq!(build_number(Some("12a")), 0);
        assert_eq!(build_number(Some("99999999999999999999999")), 0);
        assert_eq!(build_number(None), 0);
    }

    #[test]
    fn test_areas_use_distinct_collections() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "wellup");
        let mut keys: Vec<&str> = info.areas.iter().map(|a| a.collection).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), AREAS.len());
        assert!(keys.iter().all(|k| k.starts_with("wellup_")));
    }
}
