use rust_decimal::Decimal;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Result, StorageError};
use crate::models::{ResultValue, WorkoutResult};

pub struct ResultRepository<'a> {
    db: &'a Database,
}

impl<'a> ResultRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Find the result recorded for a (team, workout) pair
    pub fn find(&self, team_id: Uuid, workout_id: Uuid) -> Result<WorkoutResult> {
        let tables = self.db.read()?;
        tables
            .results
            .iter()
            .find(|r| r.team_id == team_id && r.workout_id == workout_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// Record a raw value for a (team, workout) pair. The row is created
    /// lazily on first write and updated in place afterwards; its rank
    /// columns are left for the next rank pass to rewrite.
    pub fn upsert(
        &self,
        team_id: Uuid,
        workout_id: Uuid,
        raw: Option<Decimal>,
    ) -> Result<WorkoutResult> {
        let mut tables = self.db.write()?;

        if !tables.teams.iter().any(|t| t.team_id == team_id) {
            return Err(StorageError::ConstraintViolation(format!(
                "unknown team {team_id}"
            )));
        }
        if !tables.workouts.iter().any(|w| w.workout_id == workout_id) {
            return Err(StorageError::ConstraintViolation(format!(
                "unknown workout {workout_id}"
            )));
        }

        if let Some(existing) = tables
            .results
            .iter_mut()
            .find(|r| r.team_id == team_id && r.workout_id == workout_id)
        {
            existing.value = ResultValue::from(raw);
            return Ok(existing.clone());
        }

        let result = WorkoutResult::new(team_id, workout_id, raw);
        tables.results.push(result.clone());
        Ok(result)
    }

    /// All results of one workout, in recording order
    pub fn list_for_workout(&self, workout_id: Uuid) -> Result<Vec<WorkoutResult>> {
        let tables = self.db.read()?;
        Ok(tables
            .results
            .iter()
            .filter(|r| r.workout_id == workout_id)
            .cloned()
            .collect())
    }

    /// The whole fact table, in recording order
    pub fn list_all(&self) -> Result<Vec<WorkoutResult>> {
        let tables = self.db.read()?;
        Ok(tables.results.clone())
    }

    /// Overwrite the derived rank columns of one row
    pub fn set_rank(
        &self,
        team_id: Uuid,
        workout_id: Uuid,
        position: u32,
        points: u32,
    ) -> Result<()> {
        let mut tables = self.db.write()?;

        let result = tables
            .results
            .iter_mut()
            .find(|r| r.team_id == team_id && r.workout_id == workout_id)
            .ok_or(StorageError::NotFound)?;
        result.position = position;
        result.points = points;

        Ok(())
    }

    /// Delete every recorded result
    pub fn delete_all(&self) -> Result<()> {
        let mut tables = self.db.write()?;
        tables.results.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::dto::team::CreateTeamRequest;
    use crate::dto::workout::CreateWorkoutRequest;
    use crate::models::WorkoutType;
    use crate::repository::team::TeamRepository;
    use crate::repository::workout::WorkoutRepository;

    fn seed(db: &Database) -> (Uuid, Uuid) {
        let team = TeamRepository::new(db)
            .create(&CreateTeamRequest {
                name: "Barbell Club".to_string(),
                category_id: None,
            })
            .unwrap();
        let workout = WorkoutRepository::new(db)
            .create(&CreateWorkoutRequest {
                name: "Grace".to_string(),
                description: None,
                workout_type: WorkoutType::Time,
                unit: "seconds".to_string(),
                category_ids: vec![],
            })
            .unwrap();
        (team.team_id, workout.workout_id)
    }

    #[test]
    fn upsert_creates_then_updates_in_place() {
        let db = Database::new();
        let (team_id, workout_id) = seed(&db);
        let repo = ResultRepository::new(&db);

        repo.upsert(team_id, workout_id, Some(dec!(180))).unwrap();
        repo.upsert(team_id, workout_id, Some(dec!(175))).unwrap();

        let rows = repo.list_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, ResultValue::Scored(dec!(175)));
    }

    #[test]
    fn upsert_against_unknown_team_is_rejected() {
        let db = Database::new();
        let (_, workout_id) = seed(&db);
        let err = ResultRepository::new(&db)
            .upsert(Uuid::new_v4(), workout_id, Some(dec!(180)))
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn find_missing_row_is_not_found() {
        let db = Database::new();
        let (team_id, workout_id) = seed(&db);
        let err = ResultRepository::new(&db)
            .find(team_id, workout_id)
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
