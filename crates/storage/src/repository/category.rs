use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    db: &'a Database,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all categories ordered by name
    pub fn list(&self) -> Result<Vec<Category>> {
        let tables = self.db.read()?;
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Find category by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let tables = self.db.read()?;
        tables
            .categories
            .iter()
            .find(|c| c.category_id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// Create a new category. Names are unique across the competition.
    pub fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let mut tables = self.db.write()?;

        if tables.categories.iter().any(|c| c.name == req.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "category '{}' already exists",
                req.name
            )));
        }

        let category = Category {
            category_id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            created_at: Utc::now().naive_utc(),
        };
        tables.categories.push(category.clone());

        Ok(category)
    }

    /// Update an existing category
    pub fn update(&self, id: Uuid, req: &UpdateCategoryRequest) -> Result<Category> {
        let mut tables = self.db.write()?;

        if let Some(ref name) = req.name
            && tables
                .categories
                .iter()
                .any(|c| c.category_id != id && c.name == *name)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "category '{name}' already exists"
            )));
        }

        let category = tables
            .categories
            .iter_mut()
            .find(|c| c.category_id == id)
            .ok_or(StorageError::NotFound)?;

        if let Some(ref name) = req.name {
            category.name = name.clone();
        }
        if let Some(ref description) = req.description {
            category.description = Some(description.clone());
        }

        Ok(category.clone())
    }

    /// Delete a category by ID. Refused while teams still reference it;
    /// workout links are removed with it.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.db.write()?;

        if !tables.categories.iter().any(|c| c.category_id == id) {
            return Err(StorageError::NotFound);
        }
        if tables.teams.iter().any(|t| t.category_id == Some(id)) {
            return Err(StorageError::ConstraintViolation(
                "category still has teams assigned".to_string(),
            ));
        }

        tables.workout_categories.retain(|&(_, cid)| cid != id);
        tables.categories.retain(|c| c.category_id != id);

        Ok(())
    }
}
