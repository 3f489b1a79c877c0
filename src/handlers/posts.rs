//! Disease reporting handlers: multipart photo upload, community feed, and
//! the stored-image read path.

use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::service::posts;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
};
use serde::Deserialize;

/// POST /post-disease: multipart form with `farmer_id`, `crop_type`,
/// `description` text fields and a `file` field carrying the photo.
pub async fn submit_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut farmer_id: Option<i64> = None;
    let mut crop_type: Option<String> = None;
    let mut description: Option<String> = None;
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "farmer_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                farmer_id = Some(
                    text.trim()
                        .parse()
                        .map_err(|_| AppError::BadRequest("invalid farmer_id".into()))?,
                );
            }
            "crop_type" => {
                crop_type = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "description" => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "file" => {
                let original_name = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some((bytes.to_vec(), original_name));
            }
            _ => {}
        }
    }

    let farmer_id =
        farmer_id.ok_or_else(|| AppError::BadRequest("missing 'farmer_id' field".into()))?;
    let crop_type =
        crop_type.ok_or_else(|| AppError::BadRequest("missing 'crop_type' field".into()))?;
    let description =
        description.ok_or_else(|| AppError::BadRequest("missing 'description' field".into()))?;
    let (image_bytes, original_name) =
        image.ok_or_else(|| AppError::BadRequest("missing 'file' field".into()))?;

    let post = posts::submit_post(
        &state.pool,
        state.images.as_ref(),
        farmer_id,
        &crop_type,
        &description,
        &image_bytes,
        &original_name,
    )
    .await?;
    Ok(success_one(post))
}

#[derive(Deserialize)]
pub struct FeedParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub async fn community_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let feed = posts::list_feed(&state.pool, params.limit, params.offset).await?;
    Ok(success_many(feed))
}

fn content_type_for(reference: &str) -> &'static str {
    match reference.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// GET /images/:reference: raw bytes for a stored post photo.
pub async fn get_image(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let bytes = state.images.read(&reference).await?;
    Ok((
        [(header::CONTENT_TYPE, content_type_for(&reference))],
        bytes,
    ))
}
