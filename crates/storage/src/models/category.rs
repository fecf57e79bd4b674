use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A competition division. Teams belong to at most one category; workouts
/// apply to any number of categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}
