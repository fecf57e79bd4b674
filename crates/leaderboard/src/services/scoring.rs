use std::collections::HashMap;

use rust_decimal::Decimal;
use storage::Database;
use storage::error::StorageError;
use storage::models::{ResultValue, WorkoutResult, WorkoutType};
use storage::repository::result::ResultRepository;
use storage::repository::team::TeamRepository;
use storage::repository::workout::WorkoutRepository;
use uuid::Uuid;

use crate::error::Result;

/// Recompute position and points for every result of one workout.
///
/// Results are grouped by their team's category and ranked independently per
/// group: a team never competes against a team from another category, even on
/// a shared workout. Within a group, scored entries are ordered by the
/// workout type's direction and ranked 1..n; disqualified entries all share
/// the last position, equal to the full group size; not-attempted entries are
/// held at 0, outside the ranking rather than merely behind it. Results of
/// teams without a category (or whose team is gone) are left untouched.
///
/// Re-ranking a workout that no longer exists is a logged no-op: the pass is
/// idempotent and an update racing a deletion is nothing the caller can act
/// on.
pub fn rank_workout(db: &Database, workout_id: Uuid) -> Result<()> {
    let workout = match WorkoutRepository::new(db).find_by_id(workout_id) {
        Ok(workout) => workout,
        Err(StorageError::NotFound) => {
            tracing::warn!(%workout_id, "skipping rank pass for unknown workout");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let repo = ResultRepository::new(db);
    let results = repo.list_for_workout(workout_id)?;
    if results.is_empty() {
        return Ok(());
    }

    let category_by_team: HashMap<Uuid, Uuid> = TeamRepository::new(db)
        .list(None)?
        .into_iter()
        .filter_map(|t| t.category_id.map(|c| (t.team_id, c)))
        .collect();

    // Group per category, preserving the table's recording order so the
    // stable sort below keeps equal scores in a deterministic order.
    let mut groups: HashMap<Uuid, Vec<WorkoutResult>> = HashMap::new();
    for result in results {
        if let Some(&category_id) = category_by_team.get(&result.team_id) {
            groups.entry(category_id).or_default().push(result);
        }
    }

    for (category_id, group) in groups {
        tracing::debug!(
            %workout_id,
            %category_id,
            entries = group.len(),
            "ranking workout group"
        );
        for (team_id, rank) in rank_group(workout.workout_type, &group) {
            repo.set_rank(team_id, workout_id, rank, rank)?;
        }
    }

    Ok(())
}

/// Rank one category's results for a single workout. Returns the position
/// (equal to points) to assign each team.
fn rank_group(workout_type: WorkoutType, group: &[WorkoutResult]) -> Vec<(Uuid, u32)> {
    let group_size = group.len() as u32;

    let mut scored: Vec<(Uuid, Decimal)> = Vec::new();
    let mut ranks = Vec::with_capacity(group.len());
    for result in group {
        match result.value {
            ResultValue::Scored(value) => scored.push((result.team_id, value)),
            ResultValue::Disqualified => ranks.push((result.team_id, group_size)),
            ResultValue::NotAttempted => ranks.push((result.team_id, 0)),
        }
    }

    // Stable: entries with equal values keep their recording order.
    scored.sort_by(|a, b| workout_type.compare(a.1, b.1));

    for (index, (team_id, _)) in scored.into_iter().enumerate() {
        ranks.push((team_id, index as u32 + 1));
    }

    ranks
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn row(team_id: Uuid, raw: Option<Decimal>) -> WorkoutResult {
        WorkoutResult::new(team_id, Uuid::new_v4(), raw)
    }

    fn rank_of(ranks: &[(Uuid, u32)], team_id: Uuid) -> u32 {
        ranks.iter().find(|(id, _)| *id == team_id).unwrap().1
    }

    #[test]
    fn time_group_ranks_ascending_and_skips_not_attempted() {
        let (t1, t2, t3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let group = vec![
            row(t1, Some(dec!(300))),
            row(t2, Some(dec!(280))),
            row(t3, None),
        ];

        let ranks = rank_group(WorkoutType::Time, &group);

        assert_eq!(rank_of(&ranks, t2), 1);
        assert_eq!(rank_of(&ranks, t1), 2);
        assert_eq!(rank_of(&ranks, t3), 0);
    }

    #[test]
    fn repetitions_group_ranks_descending() {
        let (t1, t2) = (Uuid::new_v4(), Uuid::new_v4());
        let group = vec![row(t1, Some(dec!(30))), row(t2, Some(dec!(45)))];

        let ranks = rank_group(WorkoutType::Repetitions, &group);

        assert_eq!(rank_of(&ranks, t2), 1);
        assert_eq!(rank_of(&ranks, t1), 2);
    }

    #[test]
    fn disqualified_shares_last_position_at_full_group_size() {
        let (t1, t2, t3, t4) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let group = vec![
            row(t1, Some(dec!(100))),
            row(t2, Some(dec!(0))),
            row(t3, None),
            row(t4, Some(dec!(0))),
        ];

        let ranks = rank_group(WorkoutType::Weight, &group);

        // Group size counts scored, disqualified and not-attempted alike.
        assert_eq!(rank_of(&ranks, t2), 4);
        assert_eq!(rank_of(&ranks, t4), 4);
        assert_eq!(rank_of(&ranks, t1), 1);
        assert_eq!(rank_of(&ranks, t3), 0);
    }

    #[test]
    fn equal_scores_keep_recording_order() {
        let (t1, t2, t3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let group = vec![
            row(t1, Some(dec!(50))),
            row(t2, Some(dec!(50))),
            row(t3, Some(dec!(60))),
        ];

        let ranks = rank_group(WorkoutType::Repetitions, &group);

        assert_eq!(rank_of(&ranks, t3), 1);
        assert_eq!(rank_of(&ranks, t1), 2);
        assert_eq!(rank_of(&ranks, t2), 3);
    }

    #[test]
    fn ranking_is_idempotent() {
        let (t1, t2) = (Uuid::new_v4(), Uuid::new_v4());
        let group = vec![row(t1, Some(dec!(250))), row(t2, Some(dec!(250)))];

        let first = rank_group(WorkoutType::Time, &group);
        let second = rank_group(WorkoutType::Time, &group);

        assert_eq!(first, second);
    }
}
