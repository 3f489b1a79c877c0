//! Persistent entities for the marketplace, disease feed, and inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User role. Stored as TEXT using the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Role {
    Farmer,
    Buyer,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    /// Natural key: registration is deduplicated on the phone number.
    pub phone_number: String,
    pub role: Role,
    pub location_district: String,
    pub company_name: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiseasePost {
    pub id: i64,
    /// Opaque storage reference returned by the image store.
    pub image_path: String,
    pub crop_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MarketplaceListing {
    pub id: i64,
    pub crop_name: String,
    pub quantity: f64,
    pub price_per_kg: f64,
    pub moisture_content: Option<f64>,
    pub is_organic: bool,
    pub created_at: DateTime<Utc>,
    pub farmer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResourceInventory {
    pub id: i64,
    pub item_name: String,
    /// "Fertilizer", "Seed", "Pesticide", or free text for anything else.
    pub category: String,
    pub stock_remaining: f64,
    pub unit: String,
    pub farmer_id: i64,
}
