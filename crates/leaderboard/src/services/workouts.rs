use storage::Database;
use storage::dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest};
use storage::models::{Workout, WorkoutType};
use storage::repository::workout::WorkoutRepository;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;

/// List all workouts in creation order
pub fn list_workouts(db: &Database) -> Result<Vec<Workout>> {
    Ok(WorkoutRepository::new(db).list(None)?)
}

/// Get workout by ID
pub fn get_workout(db: &Database, workout_id: Uuid) -> Result<Workout> {
    Ok(WorkoutRepository::new(db).find_by_id(workout_id)?)
}

/// List workouts of one measurement kind
pub fn list_workouts_by_type(db: &Database, workout_type: WorkoutType) -> Result<Vec<Workout>> {
    Ok(WorkoutRepository::new(db).list_by_type(workout_type)?)
}

/// Create a new workout, linked to the requested categories
pub fn create_workout(db: &Database, request: &CreateWorkoutRequest) -> Result<Workout> {
    request.validate()?;
    Ok(WorkoutRepository::new(db).create(request)?)
}

/// Update an existing workout. Changing the type reorders nothing by itself;
/// standings catch up on the next result update.
pub fn update_workout(
    db: &Database,
    workout_id: Uuid,
    request: &UpdateWorkoutRequest,
) -> Result<Workout> {
    request.validate()?;
    Ok(WorkoutRepository::new(db).update(workout_id, request)?)
}

/// Replace the categories a workout applies to
pub fn assign_categories(db: &Database, workout_id: Uuid, category_ids: &[Uuid]) -> Result<()> {
    Ok(WorkoutRepository::new(db).set_categories(workout_id, category_ids)?)
}

/// Categories a workout currently applies to
pub fn categories_of(db: &Database, workout_id: Uuid) -> Result<Vec<Uuid>> {
    Ok(WorkoutRepository::new(db).categories_of(workout_id)?)
}

/// Delete a workout; its results and category links go with it
pub fn delete_workout(db: &Database, workout_id: Uuid) -> Result<()> {
    Ok(WorkoutRepository::new(db).delete(workout_id)?)
}
