//! Utility to export calendar events to a JSON file
//!
//! Usage: export_schedule [OUTPUT]   (default: wellup-schedule.json)

use std::path::PathBuf;

use wellup::calendar;
use wellup::models::CalendarEvent;
use wellup::store::collection::EVENTS_KEY;
use wellup::store::{self, load_collection, migrations, Database};
use wellup::tools::events::EXPORT_FILE_NAME;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    let db_path = store::database_path();
    println!("Database path: {}", db_path.display());

    let database = Database::new(&db_path)?;
    database.with_conn(|conn| {
        migrations::run_migrations(conn)?;
        Ok(())
    })?;

    let events: Vec<CalendarEvent> = load_collection(&database, EVENTS_KEY)?;
    let json = calendar::export_events(&events)?;
    std::fs::write(&output, json)?;

    println!("Exported {} events to {}", events.len(), output.display());
    Ok(())
}
