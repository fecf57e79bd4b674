pub mod categories;
pub mod leaderboard;
pub mod scoring;
pub mod standings;
pub mod teams;
pub mod workouts;
