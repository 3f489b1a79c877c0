#![allow(dead_code)]

use agriworld_backend::models::{Role, User};
use agriworld_backend::service::users;
use agriworld_backend::{ensure_tables, AppState, LocalImageStore};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Fresh in-memory database with the schema applied. One connection so
/// every query sees the same memory store.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_tables(&pool).await.unwrap();
    pool
}

pub async fn register_farmer(pool: &SqlitePool, name: &str, phone: &str, district: &str) -> User {
    users::register(pool, name, phone, Role::Farmer, district, None)
        .await
        .unwrap()
}

pub async fn register_buyer(pool: &SqlitePool, name: &str, phone: &str, district: &str) -> User {
    users::register(pool, name, phone, Role::Buyer, district, Some("Agri Traders"))
        .await
        .unwrap()
}

/// App state backed by a temp upload directory. Keep the `TempDir` alive
/// for the duration of the test.
pub async fn test_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = memory_pool().await;
    let images = LocalImageStore::init(dir.path()).await.unwrap();
    (
        AppState {
            pool,
            images: Arc::new(images),
        },
        dir,
    )
}
