use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Category, Team, Workout, WorkoutResult};

/// The table set backing a single competition.
///
/// Tables are plain insertion-ordered vectors: rosters are small enough that
/// scans beat any index, and the result table's insertion order is what gives
/// equal scores a deterministic rank when the sort is stable.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub categories: Vec<Category>,
    pub teams: Vec<Team>,
    pub workouts: Vec<Workout>,
    pub results: Vec<WorkoutResult>,
    /// (workout_id, category_id) many-to-many link set.
    pub workout_categories: Vec<(Uuid, Uuid)>,
}

/// Cloneable handle to the in-memory store. One writer at a time; the single
/// lock is the mutual exclusion the recompute chain relies on.
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StorageError::LockPoisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StorageError::LockPoisoned)
    }
}
