//! Disease reporting: photo posts and the community feed.

use crate::error::AppError;
use crate::images::ImageStore;
use crate::models::DiseasePost;
use crate::service::{users, validation};
use chrono::Utc;
use sqlx::SqlitePool;

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

/// Store the photo, then insert the post referencing it. The author must
/// exist before anything is written.
pub async fn submit_post(
    pool: &SqlitePool,
    store: &dyn ImageStore,
    farmer_id: i64,
    crop_type: &str,
    description: &str,
    image_bytes: &[u8],
    original_name: &str,
) -> Result<DiseasePost, AppError> {
    validation::check_not_empty("crop_type", crop_type)?;
    validation::check_not_empty("description", description)?;
    if image_bytes.is_empty() {
        return Err(AppError::Validation("image file is empty".into()));
    }
    users::ensure_user_exists(pool, farmer_id).await?;

    let image_path = store.save(image_bytes, original_name).await?;
    let post = sqlx::query_as::<_, DiseasePost>(
        "INSERT INTO disease_posts (image_path, crop_type, description, created_at, author_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&image_path)
    .bind(crop_type)
    .bind(description)
    .bind(Utc::now())
    .bind(farmer_id)
    .fetch_one(pool)
    .await?;

    tracing::info!(post_id = post.id, author_id = farmer_id, "disease post submitted");
    Ok(post)
}

/// All posts, newest first. Page size defaults to 100 and clamps to 1000.
pub async fn list_feed(
    pool: &SqlitePool,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<Vec<DiseasePost>, AppError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = offset.unwrap_or(0);
    let posts = sqlx::query_as::<_, DiseasePost>(
        "SELECT * FROM disease_posts ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(posts)
}
