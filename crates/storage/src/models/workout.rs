use std::cmp::Ordering;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Measurement kind of a workout; decides which direction ranks better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Repetitions,
    Time,
    Weight,
}

impl WorkoutType {
    /// Comparator for scored values. Repetitions and weight rank
    /// more-is-better, time ranks less-is-better.
    pub fn compare(self, a: Decimal, b: Decimal) -> Ordering {
        match self {
            Self::Repetitions | Self::Weight => b.cmp(&a),
            Self::Time => a.cmp(&b),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub workout_type: WorkoutType,
    /// Display unit for recorded values, e.g. "reps", "kg", "seconds".
    pub unit: String,
    pub created_at: NaiveDateTime,
}
