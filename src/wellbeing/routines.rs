//! Weekly exercise routines

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{WellnessError, WellnessResult};
use crate::models::{
    find_mut, next_id, optional_text, remove_by_id, required_text, DayOfWeek, ExerciseRoutine,
    ExerciseType, Filter, RoutineInput,
};

/// Routines for one day of the week, sorted by start time
#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub day: DayOfWeek,
    pub day_name: &'static str,
    pub routines: Vec<ExerciseRoutine>,
    pub rest_day: bool,
}

struct CheckedInput {
    name: String,
    description: String,
    location: Option<String>,
}

fn check_input(input: &RoutineInput) -> WellnessResult<CheckedInput> {
    let name = required_text(&input.name, "Name")?;
    let description = required_text(&input.description, "Description")?;
    if input.duration == 0 {
        return Err(WellnessError::validation("Duration must be at least 1 minute"));
    }
    Ok(CheckedInput {
        name,
        description,
        location: optional_text(input.location.clone()),
    })
}

pub fn add_routine(
    routines: &mut Vec<ExerciseRoutine>,
    input: RoutineInput,
    now: DateTime<Utc>,
) -> WellnessResult<ExerciseRoutine> {
    let checked = check_input(&input)?;

    let routine = ExerciseRoutine {
        id: next_id(routines, now),
        name: checked.name,
        day: input.day,
        time: input.time,
        duration: input.duration,
        exercise_type: input.exercise_type,
        description: checked.description,
        location: checked.location,
        reminder: input.reminder,
        completed: false,
        created_at: now,
    };

    routines.push(routine.clone());
    Ok(routine)
}

/// Replace a routine's fields, keeping its id, completion and creation time
pub fn update_routine(
    routines: &mut [ExerciseRoutine],
    id: i64,
    input: RoutineInput,
) -> WellnessResult<ExerciseRoutine> {
    let checked = check_input(&input)?;
    let routine = find_mut(routines, id)?;

    routine.name = checked.name;
    routine.day = input.day;
    routine.time = input.time;
    routine.duration = input.duration;
    routine.exercise_type = input.exercise_type;
    routine.description = checked.description;
    routine.location = checked.location;
    routine.reminder = input.reminder;

    Ok(routine.clone())
}

pub fn delete_routine(routines: &mut Vec<ExerciseRoutine>, id: i64) -> WellnessResult<ExerciseRoutine> {
    remove_by_id(routines, id)
}

/// Flip a routine's completed flag
pub fn complete_routine(routines: &mut [ExerciseRoutine], id: i64) -> WellnessResult<ExerciseRoutine> {
    let routine = find_mut(routines, id)?;
    routine.completed = !routine.completed;
    Ok(routine.clone())
}

/// Monday through Sunday, each day's routines ordered by time
pub fn weekly_schedule(routines: &[ExerciseRoutine]) -> Vec<DaySchedule> {
    DayOfWeek::ALL
        .iter()
        .map(|&day| {
            let mut day_routines: Vec<ExerciseRoutine> =
                routines.iter().filter(|r| r.day == day).cloned().collect();
            day_routines.sort_by_key(|r| r.time);
            DaySchedule {
                day,
                day_name: day.display_name(),
                rest_day: day_routines.is_empty(),
                routines: day_routines,
            }
        })
        .collect()
}

pub fn list_routines(routines: &[ExerciseRoutine], filter: Filter<ExerciseType>) -> Vec<ExerciseRoutine> {
    routines
        .iter()
        .filter(|r| filter.matches(&r.exercise_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 6, 0, 0).unwrap()
    }

    fn input(name: &str, day: DayOfWeek, hour: u32, exercise_type: ExerciseType) -> RoutineInput {
        RoutineInput {
            name: name.to_string(),
            day,
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            duration: 30,
            exercise_type,
            description: "Easy pace".to_string(),
            location: Some("".to_string()),
            reminder: false,
        }
    }

    #[test]
    fn test_add_requires_fields() {
        let mut routines = Vec::new();
        let mut blank = input("Run", DayOfWeek::Monday, 7, ExerciseType::Cardio);
        blank.description = " ".to_string();
        assert!(add_routine(&mut routines, blank, now()).is_err());

        let mut zero = input("Run", DayOfWeek::Monday, 7, ExerciseType::Cardio);
        zero.duration = 0;
        assert!(add_routine(&mut routines, zero, now()).is_err());
        assert!(routines.is_empty());

        let added = add_routine(&mut routines, input("Run", DayOfWeek::Monday, 7, ExerciseType::Cardio), now()).unwrap();
        assert_eq!(added.location, None);
        assert!(!added.completed);
    }

    #[test]
    fn test_weekly_schedule_sorted_by_time() {
        let mut routines = Vec::new();
        add_routine(&mut routines, input("Evening lift", DayOfWeek::Wednesday, 18, ExerciseType::Strength), now()).unwrap();
        add_routine(&mut routines, input("Morning run", DayOfWeek::Wednesday, 6, ExerciseType::Cardio), now()).unwrap();
        add_routine(&mut routines, input("Yoga", DayOfWeek::Sunday, 9, ExerciseType::Flexibility), now()).unwrap();

        let schedule = weekly_schedule(&routines);
        assert_eq!(schedule.len(), 7);
        assert_eq!(schedule[0].day, DayOfWeek::Monday);
        assert!(schedule[0].rest_day);

        let wednesday = &schedule[2];
        let names: Vec<&str> = wednesday.routines.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Morning run", "Evening lift"]);
        assert_eq!(schedule[6].day_name, "Sunday");
        assert_eq!(schedule[6].routines.len(), 1);
    }

    #[test]
    fn test_update_in_place() {
        let mut routines = Vec::new();
        let added = add_routine(&mut routines, input("Run", DayOfWeek::Monday, 7, ExerciseType::Cardio), now()).unwrap();
        complete_routine(&mut routines, added.id).unwrap();

        let updated = update_routine(&mut routines, added.id, input("Swim", DayOfWeek::Friday, 8, ExerciseType::Sports)).unwrap();
        assert_eq!(routines.len(), 1);
        assert_eq!(updated.id, added.id);
        assert_eq!(updated.name, "Swim");
        assert_eq!(updated.day, DayOfWeek::Friday);
        assert!(updated.completed);
        assert_eq!(updated.created_at, added.created_at);

        assert!(update_routine(&mut routines, 1, input("X", DayOfWeek::Friday, 8, ExerciseType::Other)).is_err());
    }

    #[test]
    fn test_complete_toggles() {
        let mut routines = Vec::new();
        let added = add_routine(&mut routines, input("Run", DayOfWeek::Monday, 7, ExerciseType::Cardio), now()).unwrap();
        assert!(complete_routine(&mut routines, added.id).unwrap().completed);
        assert!(!complete_routine(&mut routines, added.id).unwrap().completed);
        assert!(matches!(
            complete_routine(&mut routines, 42),
            Err(WellnessError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_and_delete() {
        let mut routines = Vec::new();
        let run = add_routine(&mut routines, input("Run", DayOfWeek::Monday, 7, ExerciseType::Cardio), now()).unwrap();
        add_routine(&mut routines, input("Lift", DayOfWeek::Tuesday, 7, ExerciseType::Strength), now()).unwrap();

        assert_eq!(list_routines(&routines, Filter::All).len(), 2);
        assert_eq!(list_routines(&routines, Filter::Only(ExerciseType::Cardio)).len(), 1);

        delete_routine(&mut routines, run.id).unwrap();
        assert!(list_routines(&routines, Filter::Only(ExerciseType::Cardio)).is_empty());
        assert!(delete_routine(&mut routines, run.id).is_err());
    }
}
