//! Marketplace: listings, search, and the price fairness check.

use crate::advisory;
use crate::error::AppError;
use crate::models::MarketplaceListing;
use crate::service::{users, validation};
use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;

/// Insert one listing for an existing farmer.
pub async fn list_crop(
    pool: &SqlitePool,
    farmer_id: i64,
    crop_name: &str,
    quantity: f64,
    price: f64,
    moisture: Option<f64>,
    is_organic: bool,
) -> Result<MarketplaceListing, AppError> {
    validation::check_not_empty("crop_name", crop_name)?;
    validation::check_positive("quantity", quantity)?;
    validation::check_positive("price", price)?;
    users::ensure_user_exists(pool, farmer_id).await?;

    let listing = sqlx::query_as::<_, MarketplaceListing>(
        "INSERT INTO marketplace_listings \
         (crop_name, quantity, price_per_kg, moisture_content, is_organic, created_at, farmer_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(crop_name)
    .bind(quantity)
    .bind(price)
    .bind(moisture)
    .bind(is_organic)
    .bind(Utc::now())
    .bind(farmer_id)
    .fetch_one(pool)
    .await?;

    tracing::info!(listing_id = listing.id, farmer_id, "crop listed");
    Ok(listing)
}

/// Search listings by crop name and/or the selling farmer's district.
/// Both filters are optional, independent, and match case-insensitive
/// substrings; with neither, every listing is returned.
pub async fn search(
    pool: &SqlitePool,
    crop: Option<&str>,
    district: Option<&str>,
) -> Result<Vec<MarketplaceListing>, AppError> {
    let mut sql = String::from(
        "SELECT l.id, l.crop_name, l.quantity, l.price_per_kg, l.moisture_content, \
         l.is_organic, l.created_at, l.farmer_id \
         FROM marketplace_listings l JOIN users u ON u.id = l.farmer_id",
    );

    let mut clauses: Vec<String> = Vec::new();
    let mut param = 0u32;
    if crop.is_some() {
        param += 1;
        clauses.push(format!(
            "lower(l.crop_name) LIKE '%' || lower(${}) || '%'",
            param
        ));
    }
    if district.is_some() {
        param += 1;
        clauses.push(format!(
            "lower(u.location_district) LIKE '%' || lower(${}) || '%'",
            param
        ));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY l.created_at DESC, l.id DESC");

    let mut query = sqlx::query_as::<_, MarketplaceListing>(&sql);
    if let Some(crop) = crop {
        query = query.bind(crop);
    }
    if let Some(district) = district {
        query = query.bind(district);
    }
    let listings = query.fetch_all(pool).await?;
    Ok(listings)
}

#[derive(Debug, Serialize)]
pub struct MarketCheck {
    pub crop: String,
    pub reference_price: f64,
    pub status: &'static str,
    pub tip: &'static str,
}

/// Compare an asking price against the reference table. Crops without a
/// reference price are an explicit `NotFound`, never a default comparison.
pub fn check_market_fairness(crop_name: &str, current_price: f64) -> Result<MarketCheck, AppError> {
    let reference_price = advisory::standard_price(crop_name).ok_or_else(|| {
        AppError::NotFound(format!("no reference price for crop: {}", crop_name))
    })?;
    let (status, tip) = if current_price > reference_price {
        (
            "Premium",
            "Price is above average. Ensure quality tags are added.",
        )
    } else {
        ("Competitive", "Price is attractive for quick buyers.")
    };
    Ok(MarketCheck {
        crop: crop_name.to_string(),
        reference_price,
        status,
        tip,
    })
}
