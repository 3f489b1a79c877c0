//! Farm-resource inventory and low-stock alerting.

use crate::error::AppError;
use crate::models::ResourceInventory;
use crate::service::{users, validation};
use serde::Serialize;
use sqlx::SqlitePool;

/// Items below this stock level trigger an alert.
pub(crate) const LOW_STOCK_THRESHOLD: f64 = 5.0;

/// Insert one resource row for an existing farmer.
pub async fn add_resource(
    pool: &SqlitePool,
    farmer_id: i64,
    item_name: &str,
    category: &str,
    quantity: f64,
    unit: &str,
) -> Result<ResourceInventory, AppError> {
    validation::check_not_empty("item_name", item_name)?;
    validation::check_not_empty("category", category)?;
    validation::check_not_empty("unit", unit)?;
    validation::check_non_negative("quantity", quantity)?;
    users::ensure_user_exists(pool, farmer_id).await?;

    let resource = sqlx::query_as::<_, ResourceInventory>(
        "INSERT INTO resource_inventory (item_name, category, stock_remaining, unit, farmer_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(item_name)
    .bind(category)
    .bind(quantity)
    .bind(unit)
    .bind(farmer_id)
    .fetch_one(pool)
    .await?;

    tracing::info!(resource_id = resource.id, farmer_id, "resource added");
    Ok(resource)
}

#[derive(Debug, Serialize)]
pub struct Inventory {
    pub items: Vec<ResourceInventory>,
    pub alerts: Vec<String>,
}

/// All resource rows for the farmer plus low-stock alerts for anything
/// under the threshold.
pub async fn get_inventory(pool: &SqlitePool, farmer_id: i64) -> Result<Inventory, AppError> {
    users::ensure_user_exists(pool, farmer_id).await?;

    let items = sqlx::query_as::<_, ResourceInventory>(
        "SELECT * FROM resource_inventory WHERE farmer_id = $1 ORDER BY id",
    )
    .bind(farmer_id)
    .fetch_all(pool)
    .await?;

    let alerts = items
        .iter()
        .filter(|item| item.stock_remaining < LOW_STOCK_THRESHOLD)
        .map(|item| format!("Low stock: {}", item.item_name))
        .collect();

    Ok(Inventory { items, alerts })
}
