use sqlx::SqlitePool;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
