//! Field-rep reporting: aggregates derived from live data.

use crate::error::AppError;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Serialize, FromRow)]
pub struct DiseaseTrend {
    pub district: String,
    pub crop: String,
    pub count: i64,
}

/// Disease posts grouped by the author's district and the crop, most
/// affected first.
pub async fn disease_trends(pool: &SqlitePool) -> Result<Vec<DiseaseTrend>, AppError> {
    let trends = sqlx::query_as::<_, DiseaseTrend>(
        "SELECT u.location_district AS district, p.crop_type AS crop, COUNT(*) AS count \
         FROM disease_posts p JOIN users u ON u.id = p.author_id \
         GROUP BY u.location_district, p.crop_type \
         ORDER BY count DESC, district, crop",
    )
    .fetch_all(pool)
    .await?;
    Ok(trends)
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub report_date: NaiveDate,
    pub total_active_farmers: i64,
    pub open_listings: i64,
    pub low_stock_items: i64,
}

/// One-shot counts across the whole store.
pub async fn summary_report(pool: &SqlitePool) -> Result<SummaryReport, AppError> {
    let total_active_farmers = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE role = 'Farmer' AND is_active = 1",
    )
    .fetch_one(pool)
    .await?;

    let open_listings = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM marketplace_listings")
        .fetch_one(pool)
        .await?;

    let low_stock_items = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM resource_inventory WHERE stock_remaining < $1",
    )
    .bind(crate::service::inventory::LOW_STOCK_THRESHOLD)
    .fetch_one(pool)
    .await?;

    Ok(SummaryReport {
        report_date: Utc::now().date_naive(),
        total_active_farmers,
        open_listings,
        low_stock_items,
    })
}
