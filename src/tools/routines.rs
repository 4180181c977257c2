//! Exercise routine MCP Tools

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ExerciseRoutine, ExerciseType, Filter, RoutineInput};
use crate::store::collection::EXERCISE_ROUTINES_KEY;
use crate::store::KeyValueStore;
use crate::wellbeing::{self, DaySchedule};

use super::{modify_collection, read_collection, DeleteResponse};

/// Response for list_routines
#[derive(Debug, Serialize)]
pub struct ListRoutinesResponse {
    pub routines: Vec<ExerciseRoutine>,
    pub total: usize,
    pub completed_count: usize,
    pub total_minutes: u32,
}

pub fn add_routine(
    store: &dyn KeyValueStore,
    input: RoutineInput,
    now: DateTime<Utc>,
) -> Result<ExerciseRoutine, String> {
    let routine = modify_collection(store, EXERCISE_ROUTINES_KEY, |routines: &mut Vec<ExerciseRoutine>| {
        wellbeing::add_routine(routines, input, now)
    })?;
    tracing::info!(id = routine.id, day = routine.day.as_str(), "routine added");
    Ok(routine)
}

pub fn update_routine(
    store: &dyn KeyValueStore,
    id: i64,
    input: RoutineInput,
) -> Result<ExerciseRoutine, String> {
    let routine = modify_collection(store, EXERCISE_ROUTINES_KEY, |routines: &mut Vec<ExerciseRoutine>| {
        wellbeing::update_routine(routines, id, input)
    })?;
    tracing::info!(id, "routine updated");
    Ok(routine)
}

pub fn delete_routine(store: &dyn KeyValueStore, id: i64) -> Result<DeleteResponse, String> {
    modify_collection(store, EXERCISE_ROUTINES_KEY, |routines: &mut Vec<ExerciseRoutine>| {
        wellbeing::delete_routine(routines, id)
    })?;
    tracing::info!(id, "routine deleted");
    Ok(DeleteResponse::new(id))
}

/// Toggle a routine's completed flag
pub fn complete_routine(store: &dyn KeyValueStore, id: i64) -> Result<ExerciseRoutine, String> {
    modify_collection(store, EXERCISE_ROUTINES_KEY, |routines: &mut Vec<ExerciseRoutine>| {
        wellbeing::complete_routine(routines, id)
    })
}

pub fn get_weekly_schedule(store: &dyn KeyValueStore) -> Result<Vec<DaySchedule>, String> {
    let routines: Vec<ExerciseRoutine> = read_collection(store, EXERCISE_ROUTINES_KEY)?;
    Ok(wellbeing::weekly_schedule(&routines))
}

pub fn list_routines(
    store: &dyn KeyValueStore,
    exercise_type: Option<&str>,
) -> Result<ListRoutinesResponse, String> {
    let filter: Filter<ExerciseType> = Filter::parse(exercise_type).map_err(|e| e.to_string())?;
    let routines: Vec<ExerciseRoutine> = read_collection(store, EXERCISE_ROUTINES_KEY)?;
    let routines = wellbeing::list_routines(&routines, filter);

    Ok(ListRoutinesResponse {
        total: routines.len(),
        completed_count: routines.iter().filter(|r| r.completed).count(),
        total_minutes: routines.iter().map(|r| r.duration).sum(),
        routines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;
    use crate::store::MemoryStore;
    use chrono::{NaiveTime, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 6, 0, 0).unwrap()
    }

    fn input(name: &str, day: DayOfWeek, hour: u32) -> RoutineInput {
        RoutineInput {
            name: name.to_string(),
            day,
            time: NaiveTime::from_hms_opt(hour, 15, 0).unwrap(),
            duration: 45,
            exercise_type: ExerciseType::Strength,
            description: "Full body".to_string(),
            location: Some("Gym".to_string()),
            reminder: true,
        }
    }

    #[test]
    fn test_routine_lifecycle() {
        let store = MemoryStore::new();
        let added = add_routine(&store, input("Lift", DayOfWeek::Tuesday, 18), now()).unwrap();
        add_routine(&store, input("Early lift", DayOfWeek::Tuesday, 6), now()).unwrap();

        let schedule = get_weekly_schedule(&store).unwrap();
        assert_eq!(schedule[1].routines[0].name, "Early lift");
        assert!(schedule[0].rest_day);

        assert!(complete_routine(&store, added.id).unwrap().completed);
        let listed = list_routines(&store, Some("strength")).unwrap();
        assert_eq!(listed.total, 2);
        assert_eq!(listed.completed_count, 1);
        assert_eq!(listed.total_minutes, 90);
        assert_eq!(list_routines(&store, Some("cardio")).unwrap().total, 0);

        let updated = update_routine(&store, added.id, input("Heavy lift", DayOfWeek::Thursday, 18)).unwrap();
        assert_eq!(updated.day, DayOfWeek::Thursday);
        assert_eq!(list_routines(&store, None).unwrap().total, 2);

        delete_routine(&store, added.id).unwrap();
        assert!(complete_routine(&store, added.id).is_err());
    }
}
