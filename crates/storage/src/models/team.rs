use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    /// Teams without a category exist in the roster but are invisible to
    /// ranking and aggregation.
    pub category_id: Option<Uuid>,
    /// Cached projection, overwritten wholesale by the standings pass.
    /// Lower is better: first place scores 1 point.
    pub total_points: u32,
    /// Tiebreak counter: workouts where this team placed first.
    pub first_place_count: u32,
    /// Tiebreak counter: workouts where this team placed second.
    pub second_place_count: u32,
    pub created_at: NaiveDateTime,
}
