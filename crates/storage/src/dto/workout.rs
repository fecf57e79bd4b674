use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::WorkoutType;

/// Request payload for creating a new workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Workout name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    pub workout_type: WorkoutType,

    #[validate(length(min = 1, max = 20, message = "Unit is required"))]
    pub unit: String,

    /// Categories the workout applies to.
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

/// Request payload for updating an existing workout. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateWorkoutRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    pub workout_type: Option<WorkoutType>,

    #[validate(length(min = 1, max = 20))]
    pub unit: Option<String>,
}
