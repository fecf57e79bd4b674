use storage::error::StorageError;
use thiserror::Error;
use validator::ValidationErrors;

/// Engine-level errors. Ranking math itself never fails: any partition of
/// scored, disqualified and not-attempted entries has a well-defined outcome.
/// Only genuine store errors and request validation failures surface here.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
