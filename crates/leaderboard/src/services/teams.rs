use storage::Database;
use storage::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use storage::models::Team;
use storage::repository::team::TeamRepository;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::services::standings::standings_key;

/// List the whole roster, categoryless teams included
pub fn list_teams(db: &Database) -> Result<Vec<Team>> {
    Ok(TeamRepository::new(db).list(None)?)
}

/// Get team by ID
pub fn get_team(db: &Database, team_id: Uuid) -> Result<Team> {
    Ok(TeamRepository::new(db).find_by_id(team_id)?)
}

/// Create a new team
pub fn create_team(db: &Database, request: &CreateTeamRequest) -> Result<Team> {
    request.validate()?;
    Ok(TeamRepository::new(db).create(request)?)
}

/// Update a team's name or category. Moving a team between categories leaves
/// ranks stale until the next result update.
pub fn update_team(db: &Database, team_id: Uuid, request: &UpdateTeamRequest) -> Result<Team> {
    request.validate()?;
    Ok(TeamRepository::new(db).update(team_id, request)?)
}

/// Delete a team; its recorded results go with it. Positions of the remaining
/// teams stay stale until the next result update.
pub fn delete_team(db: &Database, team_id: Uuid) -> Result<()> {
    Ok(TeamRepository::new(db).delete(team_id)?)
}

/// The roster in standings order: fewest total points first, tiebreak
/// counters breaking equal totals.
pub fn list_teams_by_points(db: &Database) -> Result<Vec<Team>> {
    let mut teams = TeamRepository::new(db).list(None)?;
    teams.sort_by_key(standings_key);
    Ok(teams)
}
