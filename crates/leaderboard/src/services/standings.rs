use std::cmp::Reverse;
use std::collections::HashSet;

use storage::Database;
use storage::models::Team;
use storage::repository::category::CategoryRepository;
use storage::repository::result::ResultRepository;
use storage::repository::team::TeamRepository;
use storage::repository::workout::WorkoutRepository;
use uuid::Uuid;

use crate::error::Result;

/// Sort key for final standings: total points ascending, ties broken by
/// first-place finishes, then second-place finishes, most first.
pub fn standings_key(team: &Team) -> (u32, Reverse<u32>, Reverse<u32>) {
    (
        team.total_points,
        Reverse(team.first_place_count),
        Reverse(team.second_place_count),
    )
}

/// Recompute every categorized team's derived standings columns.
///
/// The applicable workout set is resolved per category first, so a stray
/// result against an out-of-category workout contributes nothing to the
/// team's total. First and second place counts are derived in the same pass;
/// like the total they are projections of the fact table, never incremented.
/// Teams without a category are not touched.
///
/// This is a full recomputation on every update, O(teams × results) per
/// pass. Rosters are competition-sized and correctness wins over incremental
/// bookkeeping.
pub fn recompute_standings(db: &Database) -> Result<()> {
    let categories = CategoryRepository::new(db).list()?;
    let results = ResultRepository::new(db).list_all()?;
    let teams = TeamRepository::new(db);
    let workouts = WorkoutRepository::new(db);

    for category in categories {
        let workout_ids: HashSet<Uuid> = workouts
            .list(Some(category.category_id))?
            .into_iter()
            .map(|w| w.workout_id)
            .collect();

        for team in teams.list(Some(category.category_id))? {
            let mut total_points: u32 = 0;
            let mut first_place_count: u32 = 0;
            let mut second_place_count: u32 = 0;

            for result in results
                .iter()
                .filter(|r| r.team_id == team.team_id && workout_ids.contains(&r.workout_id))
            {
                total_points += result.points;
                match result.position {
                    1 => first_place_count += 1,
                    2 => second_place_count += 1,
                    _ => {}
                }
            }

            teams.update_score_summary(
                team.team_id,
                total_points,
                first_place_count,
                second_place_count,
            )?;
        }
    }

    Ok(())
}
