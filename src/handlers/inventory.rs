//! Resource inventory handlers.

use crate::error::AppError;
use crate::response::{success_one, success_one_ok};
use crate::service::inventory;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddResourceBody {
    pub farmer_id: i64,
    pub item_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
}

pub async fn add_resource(
    State(state): State<AppState>,
    Json(body): Json<AddResourceBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let resource = inventory::add_resource(
        &state.pool,
        body.farmer_id,
        &body.item_name,
        &body.category,
        body.quantity,
        &body.unit,
    )
    .await?;
    Ok(success_one(resource))
}

pub async fn get_inventory(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let inventory = inventory::get_inventory(&state.pool, farmer_id).await?;
    Ok(success_one_ok(inventory))
}
