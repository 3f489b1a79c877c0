//! Table DDL. Applied at startup; every statement is idempotent.

use crate::error::AppError;
use sqlx::SqlitePool;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        phone_number TEXT NOT NULL UNIQUE,
        role TEXT NOT NULL,
        location_district TEXT NOT NULL,
        company_name TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        is_verified INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS disease_posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        image_path TEXT NOT NULL,
        crop_type TEXT NOT NULL,
        description TEXT NOT NULL,
        created_at TEXT NOT NULL,
        author_id INTEGER NOT NULL REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS marketplace_listings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        crop_name TEXT NOT NULL,
        quantity REAL NOT NULL,
        price_per_kg REAL NOT NULL,
        moisture_content REAL,
        is_organic INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        farmer_id INTEGER NOT NULL REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS resource_inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item_name TEXT NOT NULL,
        category TEXT NOT NULL,
        stock_remaining REAL NOT NULL,
        unit TEXT NOT NULL,
        farmer_id INTEGER NOT NULL REFERENCES users(id)
    )
    "#,
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_disease_posts_created_at ON disease_posts (created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_marketplace_listings_crop_name ON marketplace_listings (crop_name)",
    "CREATE INDEX IF NOT EXISTS idx_resource_inventory_farmer_id ON resource_inventory (farmer_id)",
];

/// Create the four entity tables and their indexes if missing.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
