use storage::Database;
use storage::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use storage::models::Category;
use storage::repository::category::CategoryRepository;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;

/// List all categories ordered by name
pub fn list_categories(db: &Database) -> Result<Vec<Category>> {
    Ok(CategoryRepository::new(db).list()?)
}

/// Get category by ID
pub fn get_category(db: &Database, category_id: Uuid) -> Result<Category> {
    Ok(CategoryRepository::new(db).find_by_id(category_id)?)
}

/// Create a new category
pub fn create_category(db: &Database, request: &CreateCategoryRequest) -> Result<Category> {
    request.validate()?;
    Ok(CategoryRepository::new(db).create(request)?)
}

/// Update an existing category
pub fn update_category(
    db: &Database,
    category_id: Uuid,
    request: &UpdateCategoryRequest,
) -> Result<Category> {
    request.validate()?;
    Ok(CategoryRepository::new(db).update(category_id, request)?)
}

/// Delete a category. Refused while teams still belong to it.
pub fn delete_category(db: &Database, category_id: Uuid) -> Result<()> {
    Ok(CategoryRepository::new(db).delete(category_id)?)
}
