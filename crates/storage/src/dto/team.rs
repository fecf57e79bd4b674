use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Team name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Category the team competes in. A team created without one stays out
    /// of every ranking until it is assigned.
    pub category_id: Option<Uuid>,
}

/// Request payload for updating an existing team. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub category_id: Option<Uuid>,
}
