#![allow(dead_code)]

//! Test infrastructure for ud-db repository tests

use ud_core::User;

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Format-valid 24-hex id derived from a small number
pub fn test_id(n: u32) -> String {
    format!("{:024x}", n)
}

/// Build a user with a deterministic, format-valid id
pub fn test_user(n: u32, name: &str) -> User {
    User {
        id: test_id(n),
        name: String::from(name),
    }
}
