use ::leaderboard::services::{categories, leaderboard, teams, workouts};
use rust_decimal_macros::dec;
use storage::Database;
use storage::dto::category::CreateCategoryRequest;
use storage::dto::team::CreateTeamRequest;
use storage::dto::workout::CreateWorkoutRequest;
use storage::models::WorkoutType;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db = Database::new();

    let rx = categories::create_category(
        &db,
        &CreateCategoryRequest {
            name: "RX".to_string(),
            description: Some("As prescribed".to_string()),
        },
    )?;

    let fran = workouts::create_workout(
        &db,
        &CreateWorkoutRequest {
            name: "Fran".to_string(),
            description: Some("21-15-9 thrusters and pull-ups".to_string()),
            workout_type: WorkoutType::Time,
            unit: "seconds".to_string(),
            category_ids: vec![rx.category_id],
        },
    )?;
    let clean = workouts::create_workout(
        &db,
        &CreateWorkoutRequest {
            name: "Max Clean".to_string(),
            description: None,
            workout_type: WorkoutType::Weight,
            unit: "kg".to_string(),
            category_ids: vec![rx.category_id],
        },
    )?;

    let mut roster = Vec::new();
    for name in ["Iron Works", "Second Wind", "Broken Barbells"] {
        let team = teams::create_team(
            &db,
            &CreateTeamRequest {
                name: name.to_string(),
                category_id: Some(rx.category_id),
            },
        )?;
        roster.push(team);
    }

    leaderboard::update_result(&db, roster[0].team_id, fran.workout_id, Some(dec!(251)))?;
    leaderboard::update_result(&db, roster[1].team_id, fran.workout_id, Some(dec!(239)))?;
    leaderboard::update_result(&db, roster[2].team_id, fran.workout_id, None)?;
    leaderboard::update_result(&db, roster[0].team_id, clean.workout_id, Some(dec!(112.5)))?;
    leaderboard::update_result(&db, roster[1].team_id, clean.workout_id, Some(dec!(0)))?;
    leaderboard::update_result(&db, roster[2].team_id, clean.workout_id, Some(dec!(105)))?;

    let view = leaderboard::get_leaderboard(&db, Some(rx.category_id))?;

    println!("Standings ({}):", rx.name);
    for (place, team) in view.standings().iter().enumerate() {
        println!(
            "  {}. {} - {} pts ({} firsts, {} seconds)",
            place + 1,
            team.name,
            team.total_points,
            team.first_place_count,
            team.second_place_count
        );
        for workout in &view.workouts {
            if let Some(cell) = view.cell(team.team_id, workout.workout_id) {
                let raw = Option::<rust_decimal::Decimal>::from(cell.value)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "       {} {} {} -> position {}",
                    workout.name, raw, workout.unit, cell.position
                );
            }
        }
    }

    Ok(())
}
