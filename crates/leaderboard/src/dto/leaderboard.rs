use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use storage::models::{Team, Workout, WorkoutResult};
use uuid::Uuid;

use crate::services::standings::standings_key;

/// Display-ready snapshot of the scoreboard: the team and workout rosters,
/// the stored results among them, and a total team×workout matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardView {
    pub teams: Vec<Team>,
    pub workouts: Vec<Workout>,
    pub results: Vec<WorkoutResult>,
    /// Cell for every (team, workout) pair in the view; pairs with no stored
    /// result hold an unranked zero placeholder.
    pub matrix: HashMap<Uuid, HashMap<Uuid, WorkoutResult>>,
}

impl LeaderboardView {
    /// Teams in final standings order: fewest total points first, ties broken
    /// by first-place then second-place finishes.
    pub fn standings(&self) -> Vec<Team> {
        let mut teams = self.teams.clone();
        teams.sort_by_key(standings_key);
        teams
    }

    /// The matrix cell for a (team, workout) pair, if the pair is in view.
    pub fn cell(&self, team_id: Uuid, workout_id: Uuid) -> Option<&WorkoutResult> {
        self.matrix.get(&team_id)?.get(&workout_id)
    }
}
