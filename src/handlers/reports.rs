//! Field-rep report handlers.

use crate::advisory;
use crate::error::AppError;
use crate::response::{success_many, success_one_ok};
use crate::service::reports;
use crate::state::AppState;
use axum::extract::State;

pub async fn distributor_inventory() -> impl axum::response::IntoResponse {
    success_many(advisory::DISTRIBUTOR_INVENTORY.to_vec())
}

pub async fn disease_trends(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let trends = reports::disease_trends(&state.pool).await?;
    Ok(success_many(trends))
}

pub async fn summary_report(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let report = reports::summary_report(&state.pool).await?;
    Ok(success_one_ok(report))
}
