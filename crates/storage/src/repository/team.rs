use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::Team;

pub struct TeamRepository<'a> {
    db: &'a Database,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List teams ordered by name, optionally restricted to one category.
    /// Without a filter the whole roster is returned, categoryless teams
    /// included.
    pub fn list(&self, category_id: Option<Uuid>) -> Result<Vec<Team>> {
        let tables = self.db.read()?;
        let mut teams: Vec<Team> = tables
            .teams
            .iter()
            .filter(|t| category_id.is_none() || t.category_id == category_id)
            .cloned()
            .collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    /// Find team by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let tables = self.db.read()?;
        tables
            .teams
            .iter()
            .find(|t| t.team_id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// Create a new team. Names are unique within a category.
    pub fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let mut tables = self.db.write()?;

        if let Some(category_id) = req.category_id
            && !tables
                .categories
                .iter()
                .any(|c| c.category_id == category_id)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "unknown category {category_id}"
            )));
        }
        if tables
            .teams
            .iter()
            .any(|t| t.name == req.name && t.category_id == req.category_id)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "team '{}' already exists in this category",
                req.name
            )));
        }

        let team = Team {
            team_id: Uuid::new_v4(),
            name: req.name.clone(),
            category_id: req.category_id,
            total_points: 0,
            first_place_count: 0,
            second_place_count: 0,
            created_at: Utc::now().naive_utc(),
        };
        tables.teams.push(team.clone());

        Ok(team)
    }

    /// Update an existing team
    pub fn update(&self, id: Uuid, req: &UpdateTeamRequest) -> Result<Team> {
        let mut tables = self.db.write()?;

        if let Some(category_id) = req.category_id
            && !tables
                .categories
                .iter()
                .any(|c| c.category_id == category_id)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "unknown category {category_id}"
            )));
        }

        let existing = tables
            .teams
            .iter()
            .find(|t| t.team_id == id)
            .ok_or(StorageError::NotFound)?;
        let name = req.name.as_ref().unwrap_or(&existing.name).clone();
        let category_id = req.category_id.or(existing.category_id);

        if tables
            .teams
            .iter()
            .any(|t| t.team_id != id && t.name == name && t.category_id == category_id)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "team '{name}' already exists in this category"
            )));
        }

        let team = tables
            .teams
            .iter_mut()
            .find(|t| t.team_id == id)
            .ok_or(StorageError::NotFound)?;
        team.name = name;
        team.category_id = category_id;

        Ok(team.clone())
    }

    /// Delete a team by ID, cascading its recorded results.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.db.write()?;

        if !tables.teams.iter().any(|t| t.team_id == id) {
            return Err(StorageError::NotFound);
        }

        tables.results.retain(|r| r.team_id != id);
        tables.teams.retain(|t| t.team_id != id);

        Ok(())
    }

    /// Overwrite a team's derived standings columns.
    pub fn update_score_summary(
        &self,
        id: Uuid,
        total_points: u32,
        first_place_count: u32,
        second_place_count: u32,
    ) -> Result<()> {
        let mut tables = self.db.write()?;

        let team = tables
            .teams
            .iter_mut()
            .find(|t| t.team_id == id)
            .ok_or(StorageError::NotFound)?;
        team.total_points = total_points;
        team.first_place_count = first_place_count;
        team.second_place_count = second_place_count;

        Ok(())
    }

    /// Zero every team's derived standings columns, unconditionally.
    pub fn reset_score_summaries(&self) -> Result<()> {
        let mut tables = self.db.write()?;

        for team in &mut tables.teams {
            team.total_points = 0;
            team.first_place_count = 0;
            team.second_place_count = 0;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::category::CreateCategoryRequest;
    use crate::repository::category::CategoryRepository;

    fn team_request(name: &str, category_id: Option<Uuid>) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            category_id,
        }
    }

    #[test]
    fn duplicate_name_in_same_category_is_rejected() {
        let db = Database::new();
        let category = CategoryRepository::new(&db)
            .create(&CreateCategoryRequest {
                name: "RX".to_string(),
                description: None,
            })
            .unwrap();

        let repo = TeamRepository::new(&db);
        repo.create(&team_request("Barbell Club", Some(category.category_id)))
            .unwrap();
        let err = repo
            .create(&team_request("Barbell Club", Some(category.category_id)))
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn same_name_in_different_categories_is_allowed() {
        let db = Database::new();
        let categories = CategoryRepository::new(&db);
        let rx = categories
            .create(&CreateCategoryRequest {
                name: "RX".to_string(),
                description: None,
            })
            .unwrap();
        let scaled = categories
            .create(&CreateCategoryRequest {
                name: "Scaled".to_string(),
                description: None,
            })
            .unwrap();

        let repo = TeamRepository::new(&db);
        repo.create(&team_request("Barbell Club", Some(rx.category_id)))
            .unwrap();
        repo.create(&team_request("Barbell Club", Some(scaled.category_id)))
            .unwrap();
    }

    #[test]
    fn unknown_category_is_rejected() {
        let db = Database::new();
        let err = TeamRepository::new(&db)
            .create(&team_request("Orphans", Some(Uuid::new_v4())))
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }
}
