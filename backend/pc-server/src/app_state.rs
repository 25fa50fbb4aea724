use pc_db::ProjectRepository;

use sqlx::SqlitePool;

/// Shared handler state. The pool is the only thing requests share.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn projects(&self) -> ProjectRepository {
        ProjectRepository::new(self.pool.clone())
    }
}
