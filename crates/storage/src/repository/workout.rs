use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::error::{Result, StorageError};
use crate::models::{Workout, WorkoutType};

pub struct WorkoutRepository<'a> {
    db: &'a Database,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List workouts in creation order, optionally restricted to those
    /// applicable to one category.
    pub fn list(&self, category_id: Option<Uuid>) -> Result<Vec<Workout>> {
        let tables = self.db.read()?;
        let workouts = tables
            .workouts
            .iter()
            .filter(|w| match category_id {
                Some(cid) => tables
                    .workout_categories
                    .contains(&(w.workout_id, cid)),
                None => true,
            })
            .cloned()
            .collect();
        Ok(workouts)
    }

    /// Find workout by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        let tables = self.db.read()?;
        tables
            .workouts
            .iter()
            .find(|w| w.workout_id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// List workouts of one measurement kind
    pub fn list_by_type(&self, workout_type: WorkoutType) -> Result<Vec<Workout>> {
        let tables = self.db.read()?;
        Ok(tables
            .workouts
            .iter()
            .filter(|w| w.workout_type == workout_type)
            .cloned()
            .collect())
    }

    /// Categories a workout applies to
    pub fn categories_of(&self, workout_id: Uuid) -> Result<Vec<Uuid>> {
        let tables = self.db.read()?;
        Ok(tables
            .workout_categories
            .iter()
            .filter(|&&(wid, _)| wid == workout_id)
            .map(|&(_, cid)| cid)
            .collect())
    }

    /// Create a new workout. Names are unique across the competition; the
    /// requested category links are established in the same write.
    pub fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let mut tables = self.db.write()?;

        if tables.workouts.iter().any(|w| w.name == req.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "workout '{}' already exists",
                req.name
            )));
        }
        for &category_id in &req.category_ids {
            if !tables
                .categories
                .iter()
                .any(|c| c.category_id == category_id)
            {
                return Err(StorageError::ConstraintViolation(format!(
                    "unknown category {category_id}"
                )));
            }
        }

        let workout = Workout {
            workout_id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            workout_type: req.workout_type,
            unit: req.unit.clone(),
            created_at: Utc::now().naive_utc(),
        };
        tables.workouts.push(workout.clone());
        for &category_id in &req.category_ids {
            tables
                .workout_categories
                .push((workout.workout_id, category_id));
        }

        Ok(workout)
    }

    /// Update an existing workout
    pub fn update(&self, id: Uuid, req: &UpdateWorkoutRequest) -> Result<Workout> {
        let mut tables = self.db.write()?;

        if let Some(ref name) = req.name
            && tables
                .workouts
                .iter()
                .any(|w| w.workout_id != id && w.name == *name)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "workout '{name}' already exists"
            )));
        }

        let workout = tables
            .workouts
            .iter_mut()
            .find(|w| w.workout_id == id)
            .ok_or(StorageError::NotFound)?;

        if let Some(ref name) = req.name {
            workout.name = name.clone();
        }
        if let Some(ref description) = req.description {
            workout.description = Some(description.clone());
        }
        if let Some(workout_type) = req.workout_type {
            workout.workout_type = workout_type;
        }
        if let Some(ref unit) = req.unit {
            workout.unit = unit.clone();
        }

        Ok(workout.clone())
    }

    /// Replace a workout's category links
    pub fn set_categories(&self, workout_id: Uuid, category_ids: &[Uuid]) -> Result<()> {
        let mut tables = self.db.write()?;

        if !tables.workouts.iter().any(|w| w.workout_id == workout_id) {
            return Err(StorageError::NotFound);
        }
        for &category_id in category_ids {
            if !tables
                .categories
                .iter()
                .any(|c| c.category_id == category_id)
            {
                return Err(StorageError::ConstraintViolation(format!(
                    "unknown category {category_id}"
                )));
            }
        }

        tables.workout_categories.retain(|&(wid, _)| wid != workout_id);
        for &category_id in category_ids {
            tables.workout_categories.push((workout_id, category_id));
        }

        Ok(())
    }

    /// Delete a workout by ID, cascading its results and category links.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.db.write()?;

        if !tables.workouts.iter().any(|w| w.workout_id == id) {
            return Err(StorageError::NotFound);
        }

        tables.results.retain(|r| r.workout_id != id);
        tables.workout_categories.retain(|&(wid, _)| wid != id);
        tables.workouts.retain(|w| w.workout_id != id);

        Ok(())
    }
}
