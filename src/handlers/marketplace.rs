//! Marketplace handlers.

use crate::error::AppError;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::marketplace;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListCropBody {
    pub farmer_id: i64,
    pub crop_name: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub moisture: Option<f64>,
    #[serde(default)]
    pub is_organic: bool,
}

pub async fn list_crop(
    State(state): State<AppState>,
    Json(body): Json<ListCropBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let listing = marketplace::list_crop(
        &state.pool,
        body.farmer_id,
        &body.crop_name,
        body.quantity,
        body.price,
        body.moisture,
        body.is_organic,
    )
    .await?;
    Ok(success_one(listing))
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub crop: Option<String>,
    pub district: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let listings = marketplace::search(
        &state.pool,
        params.crop.as_deref(),
        params.district.as_deref(),
    )
    .await?;
    Ok(success_many(listings))
}

#[derive(Deserialize)]
pub struct MarketCheckParams {
    pub current_price: f64,
}

pub async fn market_check(
    Path(crop_name): Path<String>,
    Query(params): Query<MarketCheckParams>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let check = marketplace::check_market_fairness(&crop_name, params.current_price)?;
    Ok(success_one_ok(check))
}
