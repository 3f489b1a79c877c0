//! User directory handlers.

use crate::error::AppError;
use crate::models::Role;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::users;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterBody {
    pub full_name: String,
    pub phone_number: String,
    pub role: Role,
    pub location_district: String,
    #[serde(default)]
    pub company_name: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = users::register(
        &state.pool,
        &body.full_name,
        &body.phone_number,
        body.role,
        &body.location_district,
        body.company_name.as_deref(),
    )
    .await?;
    Ok(success_one(user))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = users::get_profile(&state.pool, user_id).await?;
    Ok(success_one_ok(user))
}

#[derive(Deserialize)]
pub struct FarmerSearchParams {
    pub district: String,
}

pub async fn find_farmers(
    State(state): State<AppState>,
    Query(params): Query<FarmerSearchParams>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let farmers = users::find_farmers_by_district(&state.pool, &params.district).await?;
    Ok(success_many(farmers))
}
