use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a recorded entry.
///
/// Kept as a tagged union so ranking code pattern-matches instead of
/// re-deriving meaning from a nullable number. On the wire and at the API
/// boundary the value is still the raw nullable decimal: absent means the
/// workout was not attempted, zero (or any non-positive entry) marks a
/// disqualification, anything positive is a comparable measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum ResultValue {
    NotAttempted,
    Disqualified,
    Scored(Decimal),
}

impl From<Option<Decimal>> for ResultValue {
    fn from(raw: Option<Decimal>) -> Self {
        match raw {
            None => Self::NotAttempted,
            Some(v) if v > Decimal::ZERO => Self::Scored(v),
            Some(_) => Self::Disqualified,
        }
    }
}

impl From<ResultValue> for Option<Decimal> {
    fn from(value: ResultValue) -> Self {
        match value {
            ResultValue::NotAttempted => None,
            ResultValue::Disqualified => Some(Decimal::ZERO),
            ResultValue::Scored(v) => Some(v),
        }
    }
}

/// One row of the fact table, keyed uniquely by (team, workout).
///
/// `position` and `points` are derived: the rank pass rewrites them for every
/// row of a (workout, category) group, never patches them in place. Position
/// is 1-based within the group; 0 means unranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResult {
    pub team_id: Uuid,
    pub workout_id: Uuid,
    pub value: ResultValue,
    pub position: u32,
    pub points: u32,
}

impl WorkoutResult {
    pub fn new(team_id: Uuid, workout_id: Uuid, raw: Option<Decimal>) -> Self {
        Self {
            team_id,
            workout_id,
            value: ResultValue::from(raw),
            position: 0,
            points: 0,
        }
    }

    /// Stand-in for a (team, workout) cell with no stored row, so the display
    /// matrix is total and rendering never branches on absence. Carries a raw
    /// zero, which deliberately collapses not-attempted into the same display
    /// shape as a disqualification.
    pub fn placeholder(team_id: Uuid, workout_id: Uuid) -> Self {
        Self {
            team_id,
            workout_id,
            value: ResultValue::Disqualified,
            position: 0,
            points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn absent_classifies_as_not_attempted() {
        assert_eq!(ResultValue::from(None), ResultValue::NotAttempted);
    }

    #[test]
    fn zero_classifies_as_disqualified() {
        assert_eq!(ResultValue::from(Some(dec!(0))), ResultValue::Disqualified);
    }

    #[test]
    fn negative_classifies_as_disqualified() {
        assert_eq!(ResultValue::from(Some(dec!(-5))), ResultValue::Disqualified);
    }

    #[test]
    fn positive_classifies_as_scored() {
        assert_eq!(
            ResultValue::from(Some(dec!(42.5))),
            ResultValue::Scored(dec!(42.5))
        );
    }

    #[test]
    fn serializes_as_raw_nullable_decimal() {
        let row = WorkoutResult::new(Uuid::new_v4(), Uuid::new_v4(), None);
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["value"].is_null());

        let row = WorkoutResult::new(Uuid::new_v4(), Uuid::new_v4(), Some(dec!(300)));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["value"], serde_json::json!("300"));
    }
}
