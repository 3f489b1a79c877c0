//! Crop advisory handler.

use crate::advisory;
use crate::error::AppError;
use crate::response::success_one_ok;
use axum::extract::Path;
use serde::Serialize;

#[derive(Serialize)]
pub struct AdvisoryBody {
    pub crop: String,
    #[serde(flatten)]
    pub advisory: &'static advisory::CropAdvisory,
}

pub async fn get_advisory(
    Path(crop_name): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let advisory = advisory::get_advisory(&crop_name)
        .ok_or_else(|| AppError::NotFound(format!("no advisory for crop: {}", crop_name)))?;
    Ok(success_one_ok(AdvisoryBody {
        crop: crop_name,
        advisory,
    }))
}
