#![allow(dead_code)]

//! Test infrastructure for ud-server API tests

use ud_server::AppState;

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/ud-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Seed a user directly through the pool
pub async fn seed_user(pool: &SqlitePool, id: &str, name: &str) {
    sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to seed user");
}

/// Format-valid 24-hex id derived from a small number
pub fn test_id(n: u32) -> String {
    format!("{:024x}", n)
}
