//! Calendar module
//!
//! Month grids, month navigation and the event collection.

pub mod cursor;
pub mod events;
pub mod grid;

pub use cursor::MonthCursor;
pub use events::{
    delete_event, export_events, filter_by_category, list_events_chronological, upsert_event,
};
pub use grid::{build_month_grid, build_month_grid_at, CalendarGridCell, EventIndex, GRID_CELLS};
