//! Ranking and scoring engine for multi-team, multi-category fitness
//! competitions.
//!
//! Results are recorded per (team, workout) pair through
//! [`services::leaderboard::update_result`], which runs the full recompute
//! chain: re-rank the workout within each category, then re-aggregate every
//! team's standings. [`services::leaderboard::get_leaderboard`] assembles the
//! display-ready view.

pub mod dto;
pub mod error;
pub mod services;

pub use error::{LeaderboardError, Result};
