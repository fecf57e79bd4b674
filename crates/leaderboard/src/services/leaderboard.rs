use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use storage::Database;
use storage::models::WorkoutResult;
use storage::repository::result::ResultRepository;
use storage::repository::team::TeamRepository;
use storage::repository::workout::WorkoutRepository;
use uuid::Uuid;

use crate::dto::leaderboard::LeaderboardView;
use crate::error::Result;
use crate::services::{scoring, standings};

/// Record a raw result for a (team, workout) pair and run the full recompute
/// chain.
///
/// Step order is mandatory: the rank pass writes the points the aggregation
/// pass reads. A failure between steps leaves stale aggregates behind until
/// the next successful update or a reset; that window is documented, not
/// masked.
pub fn update_result(
    db: &Database,
    team_id: Uuid,
    workout_id: Uuid,
    raw: Option<Decimal>,
) -> Result<()> {
    ResultRepository::new(db).upsert(team_id, workout_id, raw)?;
    scoring::rank_workout(db, workout_id)?;
    standings::recompute_standings(db)?;
    Ok(())
}

/// Assemble the display-ready scoreboard, optionally scoped to one category.
///
/// With a filter, only the category's teams, its applicable workouts, and the
/// results among that set are included; a category with no teams yields an
/// empty view, not an error. Every (team, workout) cell of the matrix is
/// filled, with an unranked zero placeholder standing in for missing rows so
/// display code never branches on absence.
pub fn get_leaderboard(db: &Database, category_id: Option<Uuid>) -> Result<LeaderboardView> {
    let teams = TeamRepository::new(db).list(category_id)?;
    let workouts = WorkoutRepository::new(db).list(category_id)?;

    let team_ids: HashSet<Uuid> = teams.iter().map(|t| t.team_id).collect();
    let workout_ids: HashSet<Uuid> = workouts.iter().map(|w| w.workout_id).collect();

    let results: Vec<WorkoutResult> = ResultRepository::new(db)
        .list_all()?
        .into_iter()
        .filter(|r| team_ids.contains(&r.team_id) && workout_ids.contains(&r.workout_id))
        .collect();

    let mut matrix: HashMap<Uuid, HashMap<Uuid, WorkoutResult>> = HashMap::new();
    for team in &teams {
        let row = matrix.entry(team.team_id).or_default();
        for workout in &workouts {
            let cell = results
                .iter()
                .find(|r| r.team_id == team.team_id && r.workout_id == workout.workout_id)
                .cloned()
                .unwrap_or_else(|| WorkoutResult::placeholder(team.team_id, workout.workout_id));
            row.insert(workout.workout_id, cell);
        }
    }

    Ok(LeaderboardView {
        teams,
        workouts,
        results,
        matrix,
    })
}

/// Wipe every recorded result and zero all derived standings columns, across
/// all categories.
pub fn reset_leaderboard(db: &Database) -> Result<()> {
    ResultRepository::new(db).delete_all()?;
    TeamRepository::new(db).reset_score_summaries()?;
    tracing::info!("leaderboard reset: results deleted, team standings zeroed");
    Ok(())
}
