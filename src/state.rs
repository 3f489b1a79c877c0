//! Shared application state for all routes.

use crate::images::ImageStore;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub images: Arc<dyn ImageStore>,
}
